use agentflow_core::repo::query::{find_organization_by_slug, slug_exists_in_organizations};
use agentflow_core::{
    JsonStore, OrganizationService, ProjectService, ServiceError, ValidationError,
};
use tempfile::TempDir;
use uuid::Uuid;

fn services() -> (TempDir, OrganizationService, ProjectService, JsonStore) {
    let dir = TempDir::new().unwrap();
    let store = JsonStore::new(dir.path());
    (
        dir,
        OrganizationService::new(store.clone()),
        ProjectService::new(store.clone()),
        store,
    )
}

#[test]
fn created_organization_is_findable_by_slug() {
    let (_dir, orgs, _projects, store) = services();
    let owner = Uuid::new_v4();

    let org = orgs.create(owner, "Acme", "acme", None).unwrap();

    let db = store.load().unwrap();
    let found = find_organization_by_slug(&db, "acme").unwrap();
    assert_eq!(found.id, org.id);
    assert_eq!(found.owner_id, owner);
    assert!(slug_exists_in_organizations(&db, "acme"));
    assert!(!slug_exists_in_organizations(&db, "other"));
}

#[test]
fn organization_slugs_are_globally_unique() {
    let (_dir, orgs, _projects, store) = services();

    orgs.create(Uuid::new_v4(), "Acme", "acme", None).unwrap();
    // Even a different owner may not reuse the slug.
    let err = orgs
        .create(Uuid::new_v4(), "Other Acme", "acme", None)
        .unwrap_err();
    assert!(matches!(err, ServiceError::Conflict(_)));

    assert_eq!(store.load().unwrap().organizations.len(), 1);
}

#[test]
fn organization_inputs_are_validated() {
    let (_dir, orgs, _projects, _store) = services();
    let owner = Uuid::new_v4();

    assert!(matches!(
        orgs.create(owner, "", "acme", None).unwrap_err(),
        ServiceError::Validation(ValidationError::NameEmpty)
    ));
    assert!(matches!(
        orgs.create(owner, "Acme", "Not A Slug", None).unwrap_err(),
        ServiceError::Validation(ValidationError::InvalidSlug(_))
    ));
}

#[test]
fn list_owned_returns_only_that_owner_in_order() {
    let (_dir, orgs, _projects, _store) = services();
    let owner_a = Uuid::new_v4();
    let owner_b = Uuid::new_v4();

    orgs.create(owner_a, "One", "one", None).unwrap();
    orgs.create(owner_b, "Two", "two", None).unwrap();
    orgs.create(owner_a, "Three", "three", None).unwrap();

    let owned = orgs.list_owned(owner_a).unwrap();
    assert_eq!(owned.len(), 2);
    assert_eq!(owned[0].slug, "one");
    assert_eq!(owned[1].slug, "three");
}

#[test]
fn project_creation_requires_an_existing_organization() {
    let (_dir, _orgs, projects, _store) = services();

    let err = projects
        .create("missing-org", "Web", "web", None, None)
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[test]
fn project_slugs_are_scoped_per_organization() {
    let (_dir, orgs, projects, _store) = services();
    let owner = Uuid::new_v4();

    let org_a = orgs.create(owner, "Org A", "org-a", None).unwrap();
    let org_b = orgs.create(owner, "Org B", "org-b", None).unwrap();

    // Same slug in two different organizations: both succeed.
    let web_a = projects.create("org-a", "Web A", "web", None, None).unwrap();
    let web_b = projects.create("org-b", "Web B", "web", None, None).unwrap();
    assert_ne!(web_a.id, web_b.id);
    assert_eq!(web_a.organization_id, org_a.id);
    assert_eq!(web_b.organization_id, org_b.id);

    // Same slug inside the same organization: conflict.
    let err = projects
        .create("org-a", "Web Again", "web", None, None)
        .unwrap_err();
    assert!(matches!(err, ServiceError::Conflict(_)));
}

#[test]
fn scoped_lookup_returns_the_right_project_per_organization() {
    let (_dir, orgs, projects, store) = services();
    let owner = Uuid::new_v4();

    let org_a = orgs.create(owner, "Org A", "org-a", None).unwrap();
    let org_b = orgs.create(owner, "Org B", "org-b", None).unwrap();
    let web_a = projects.create("org-a", "Web A", "web", None, None).unwrap();
    let web_b = projects.create("org-b", "Web B", "web", None, None).unwrap();

    let db = store.load().unwrap();
    let found_a =
        agentflow_core::repo::query::find_project_by_slug(&db, org_a.id, "web").unwrap();
    let found_b =
        agentflow_core::repo::query::find_project_by_slug(&db, org_b.id, "web").unwrap();
    assert_eq!(found_a.id, web_a.id);
    assert_eq!(found_b.id, web_b.id);
}

#[test]
fn project_list_preserves_creation_order() {
    let (_dir, orgs, projects, _store) = services();

    orgs.create(Uuid::new_v4(), "Acme", "acme", None).unwrap();
    projects.create("acme", "Web", "web", None, None).unwrap();
    projects
        .create("acme", "API", "api", None, Some("https://github.com/acme/api".into()))
        .unwrap();

    let listed = projects.list("acme").unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].slug, "web");
    assert_eq!(listed[1].slug, "api");
    assert_eq!(
        listed[1].github_url.as_deref(),
        Some("https://github.com/acme/api")
    );
    assert!(listed.iter().all(|project| project.is_active));
}
