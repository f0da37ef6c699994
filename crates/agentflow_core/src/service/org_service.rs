//! Organization creation and listing.
//!
//! # Invariants
//! - Organization slugs are unique across the whole store.
//! - `owner_id` is taken on trust; the store performs no referential check.

use crate::model::record::{validate_name, validate_slug, Organization, RecordId};
use crate::repo::query;
use crate::service::{ServiceError, ServiceResult};
use crate::store::JsonStore;
use log::info;

/// Use-case service for organization operations.
pub struct OrganizationService {
    store: JsonStore,
}

impl OrganizationService {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    /// Creates an organization after checking the global slug invariant.
    pub fn create(
        &self,
        owner_id: RecordId,
        name: &str,
        slug: &str,
        description: Option<String>,
    ) -> ServiceResult<Organization> {
        validate_name(name)?;
        validate_slug(slug)?;

        let mut db = self.store.load()?;
        if query::slug_exists_in_organizations(&db, slug) {
            return Err(ServiceError::Conflict(format!(
                "organization slug already taken: {slug}"
            )));
        }

        let org = Organization::new(owner_id, name, slug, description);
        db.organizations.push(org.clone());
        self.store.save(&db)?;

        info!(
            "event=org_create module=service status=ok org_id={} slug={slug}",
            org.id
        );
        Ok(org)
    }

    /// Returns the organizations owned by a user, in creation order.
    pub fn list_owned(&self, owner_id: RecordId) -> ServiceResult<Vec<Organization>> {
        let db = self.store.load()?;
        Ok(query::find_organizations_by_owner(&db, owner_id)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Resolves an organization by its slug.
    pub fn get_by_slug(&self, slug: &str) -> ServiceResult<Organization> {
        let db = self.store.load()?;
        query::find_organization_by_slug(&db, slug)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(format!("organization not found: {slug}")))
    }
}
