//! Point lookups, filters and existence checks over a `Database` snapshot.
//!
//! All functions are total and side-effect free: they linearly scan the
//! relevant collection and return the first match in insertion order.
//! Linear scans are deliberate at this data scale; there is no index.

use crate::model::record::{Database, Organization, Project, RecordId, User};

/// Finds a user by exact email match.
pub fn find_user_by_email<'db>(db: &'db Database, email: &str) -> Option<&'db User> {
    db.users.iter().find(|user| user.email == email)
}

/// Finds a user by id.
pub fn find_user_by_id(db: &Database, id: RecordId) -> Option<&User> {
    db.users.iter().find(|user| user.id == id)
}

/// Finds an organization by its globally unique slug.
pub fn find_organization_by_slug<'db>(db: &'db Database, slug: &str) -> Option<&'db Organization> {
    db.organizations.iter().find(|org| org.slug == slug)
}

/// Finds a project by slug within one organization.
///
/// Scoped lookup: both `organization_id` and `slug` must match, so the same
/// slug may resolve to different projects in different organizations.
pub fn find_project_by_slug<'db>(
    db: &'db Database,
    organization_id: RecordId,
    slug: &str,
) -> Option<&'db Project> {
    db.projects
        .iter()
        .find(|project| project.organization_id == organization_id && project.slug == slug)
}

/// Returns all projects of an organization in insertion order.
pub fn find_projects_by_organization(db: &Database, organization_id: RecordId) -> Vec<&Project> {
    db.projects
        .iter()
        .filter(|project| project.organization_id == organization_id)
        .collect()
}

/// Returns all organizations owned by a user in insertion order.
pub fn find_organizations_by_owner(db: &Database, owner_id: RecordId) -> Vec<&Organization> {
    db.organizations
        .iter()
        .filter(|org| org.owner_id == owner_id)
        .collect()
}

/// Existence shortcut for the global organization slug invariant.
pub fn slug_exists_in_organizations(db: &Database, slug: &str) -> bool {
    find_organization_by_slug(db, slug).is_some()
}

/// Existence shortcut for the per-organization project slug invariant.
pub fn slug_exists_in_projects(db: &Database, organization_id: RecordId, slug: &str) -> bool {
    find_project_by_slug(db, organization_id, slug).is_some()
}
