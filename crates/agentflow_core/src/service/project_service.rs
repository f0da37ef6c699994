//! Project creation and listing inside an organization.
//!
//! # Invariants
//! - Project slugs are unique per organization; the same slug may exist in
//!   two different organizations.

use crate::model::record::{validate_name, validate_slug, Project};
use crate::repo::query;
use crate::service::{ServiceError, ServiceResult};
use crate::store::JsonStore;
use log::info;

/// Use-case service for project operations.
pub struct ProjectService {
    store: JsonStore,
}

impl ProjectService {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    /// Creates a project under the organization identified by slug.
    pub fn create(
        &self,
        organization_slug: &str,
        name: &str,
        slug: &str,
        description: Option<String>,
        github_url: Option<String>,
    ) -> ServiceResult<Project> {
        validate_name(name)?;
        validate_slug(slug)?;

        let mut db = self.store.load()?;
        let org_id = query::find_organization_by_slug(&db, organization_slug)
            .map(|org| org.id)
            .ok_or_else(|| {
                ServiceError::NotFound(format!("organization not found: {organization_slug}"))
            })?;

        if query::slug_exists_in_projects(&db, org_id, slug) {
            return Err(ServiceError::Conflict(format!(
                "project slug already taken in organization {organization_slug}: {slug}"
            )));
        }

        let project = Project::new(org_id, name, slug, description, github_url);
        db.projects.push(project.clone());
        self.store.save(&db)?;

        info!(
            "event=project_create module=service status=ok project_id={} org_id={org_id} slug={slug}",
            project.id
        );
        Ok(project)
    }

    /// Returns the projects of an organization, in creation order.
    pub fn list(&self, organization_slug: &str) -> ServiceResult<Vec<Project>> {
        let db = self.store.load()?;
        let org_id = query::find_organization_by_slug(&db, organization_slug)
            .map(|org| org.id)
            .ok_or_else(|| {
                ServiceError::NotFound(format!("organization not found: {organization_slug}"))
            })?;

        Ok(query::find_projects_by_organization(&db, org_id)
            .into_iter()
            .cloned()
            .collect())
    }
}
