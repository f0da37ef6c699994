use agentflow_core::repo::query::find_user_by_email;
use agentflow_core::service::user_service::DEFAULT_API_KEY_NAME;
use agentflow_core::{
    JsonStore, ServiceError, UserService, ValidationError, API_KEY_PREFIX,
};
use tempfile::TempDir;
use uuid::Uuid;

fn service() -> (TempDir, UserService, JsonStore) {
    let dir = TempDir::new().unwrap();
    let store = JsonStore::new(dir.path());
    (dir, UserService::new(store.clone()), store)
}

#[test]
fn register_then_lookup_by_email() {
    let (_dir, service, store) = service();

    let user = service
        .register("test@example.com", "password123", "Test User")
        .unwrap();
    assert_eq!(user.email, "test@example.com");

    let db = store.load().unwrap();
    let found = find_user_by_email(&db, "test@example.com").unwrap();
    assert_eq!(found.name, "Test User");
    assert_eq!(found.id, user.id);
}

#[test]
fn register_creates_one_default_api_key() {
    let (_dir, service, _store) = service();

    let user = service
        .register("test@example.com", "password123", "Test User")
        .unwrap();

    assert_eq!(user.api_keys.len(), 1);
    let key = &user.api_keys[0];
    assert_eq!(key.name, DEFAULT_API_KEY_NAME);
    assert!(key.key.starts_with(API_KEY_PREFIX));
    assert!(key.is_active);
}

#[test]
fn register_stores_a_digest_not_the_password() {
    let (_dir, service, store) = service();

    service
        .register("test@example.com", "password123", "Test User")
        .unwrap();

    let db = store.load().unwrap();
    let user = find_user_by_email(&db, "test@example.com").unwrap();
    assert_ne!(user.password_hash, "password123");
    assert_eq!(user.password_hash.len(), 64);

    let raw = std::fs::read_to_string(store.data_file()).unwrap();
    assert!(!raw.contains("password123"));
}

#[test]
fn duplicate_email_is_rejected_and_store_keeps_one_user() {
    let (_dir, service, store) = service();

    service
        .register("test@example.com", "password123", "User 1")
        .unwrap();
    let err = service
        .register("test@example.com", "password456", "User 2")
        .unwrap_err();
    assert!(matches!(err, ServiceError::Conflict(_)));

    let db = store.load().unwrap();
    let matching: Vec<_> = db
        .users
        .iter()
        .filter(|user| user.email == "test@example.com")
        .collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].name, "User 1");
}

#[test]
fn register_validates_inputs_before_mutation() {
    let (_dir, service, store) = service();

    let err = service
        .register("invalid-email", "password123", "Test")
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Validation(ValidationError::InvalidEmail(_))
    ));

    let err = service
        .register("test@example.com", "pass", "Test")
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Validation(ValidationError::PasswordTooShort { min: 8 })
    ));

    let err = service
        .register("test@example.com", "password123", &"A".repeat(256))
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Validation(ValidationError::NameTooLong { max: 255 })
    ));

    // No failed attempt reached the store.
    assert!(store.load().unwrap().users.is_empty());
}

#[test]
fn login_succeeds_with_the_registered_password() {
    let (_dir, service, _store) = service();

    service
        .register("test@example.com", "password123", "Test User")
        .unwrap();
    let user = service.login("test@example.com", "password123").unwrap();
    assert_eq!(user.email, "test@example.com");
}

#[test]
fn login_failures_are_indistinguishable() {
    let (_dir, service, _store) = service();

    service
        .register("test@example.com", "password123", "Test User")
        .unwrap();

    let unknown = service
        .login("nonexistent@example.com", "password123")
        .unwrap_err();
    let wrong = service
        .login("test@example.com", "wrongpassword")
        .unwrap_err();
    assert!(matches!(unknown, ServiceError::InvalidCredentials));
    assert!(matches!(wrong, ServiceError::InvalidCredentials));
}

#[test]
fn create_api_key_appends_and_persists() {
    let (_dir, service, _store) = service();

    let user = service
        .register("test@example.com", "password123", "Test User")
        .unwrap();
    let key = service.create_api_key(user.id, "CI Key").unwrap();
    assert!(key.key.starts_with(API_KEY_PREFIX));

    let keys = service.list_api_keys(user.id).unwrap();
    assert_eq!(keys.len(), 2);
    assert_eq!(keys[0].name, DEFAULT_API_KEY_NAME);
    assert_eq!(keys[1].name, "CI Key");
    assert_eq!(keys[1].id, key.id);
}

#[test]
fn api_key_operations_require_an_existing_user() {
    let (_dir, service, _store) = service();

    let missing = Uuid::new_v4();
    assert!(matches!(
        service.create_api_key(missing, "Key").unwrap_err(),
        ServiceError::NotFound(_)
    ));
    assert!(matches!(
        service.list_api_keys(missing).unwrap_err(),
        ServiceError::NotFound(_)
    ));
}

#[test]
fn api_key_name_is_validated() {
    let (_dir, service, _store) = service();

    let user = service
        .register("test@example.com", "password123", "Test User")
        .unwrap();
    let err = service
        .create_api_key(user.id, &"A".repeat(256))
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Validation(ValidationError::NameTooLong { max: 255 })
    ));
}
