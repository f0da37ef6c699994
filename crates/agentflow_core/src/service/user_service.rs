//! User registration, login and API-key management.
//!
//! # Responsibility
//! - Enforce the email uniqueness invariant on registration.
//! - Keep only password digests in the store.
//!
//! # Invariants
//! - Registration creates exactly one default API key named "Default Key".
//! - Login failures never reveal whether the email exists.

use crate::auth::{generate_api_key, hash_password, verify_password};
use crate::model::record::{
    validate_email, validate_name, validate_password, ApiKey, RecordId, User,
};
use crate::repo::query;
use crate::service::{ServiceError, ServiceResult};
use crate::store::JsonStore;
use log::info;

pub const DEFAULT_API_KEY_NAME: &str = "Default Key";

/// Use-case service for account and credential operations.
pub struct UserService {
    store: JsonStore,
}

impl UserService {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    /// Registers a new user and returns it with its default API key attached.
    ///
    /// The plaintext token lives in `user.api_keys[0].key`; callers must
    /// show it immediately, it is not printed again.
    pub fn register(&self, email: &str, password: &str, name: &str) -> ServiceResult<User> {
        validate_email(email)?;
        validate_password(password)?;
        validate_name(name)?;

        let mut db = self.store.load()?;
        if query::find_user_by_email(&db, email).is_some() {
            return Err(ServiceError::Conflict(format!(
                "user already exists: {email}"
            )));
        }

        let mut user = User::new(email, hash_password(password), name);
        user.api_keys
            .push(ApiKey::new(generate_api_key(), DEFAULT_API_KEY_NAME));

        db.users.push(user.clone());
        self.store.save(&db)?;

        info!(
            "event=user_register module=service status=ok user_id={}",
            user.id
        );
        Ok(user)
    }

    /// Authenticates by email and password.
    pub fn login(&self, email: &str, password: &str) -> ServiceResult<User> {
        let db = self.store.load()?;
        let user = query::find_user_by_email(&db, email).ok_or(ServiceError::InvalidCredentials)?;
        if !verify_password(password, &user.password_hash) {
            return Err(ServiceError::InvalidCredentials);
        }

        info!(
            "event=user_login module=service status=ok user_id={}",
            user.id
        );
        Ok(user.clone())
    }

    /// Returns the user for a stored session id, if it still exists.
    pub fn get_user(&self, user_id: RecordId) -> ServiceResult<User> {
        let db = self.store.load()?;
        query::find_user_by_id(&db, user_id)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(format!("user not found: {user_id}")))
    }

    /// Appends a fresh API key to the user's ordered key list.
    pub fn create_api_key(&self, user_id: RecordId, name: &str) -> ServiceResult<ApiKey> {
        validate_name(name)?;

        let mut db = self.store.load()?;
        let user = db
            .users
            .iter_mut()
            .find(|user| user.id == user_id)
            .ok_or_else(|| ServiceError::NotFound(format!("user not found: {user_id}")))?;

        let api_key = ApiKey::new(generate_api_key(), name);
        user.api_keys.push(api_key.clone());
        self.store.save(&db)?;

        info!(
            "event=api_key_create module=service status=ok user_id={user_id} key_id={}",
            api_key.id
        );
        Ok(api_key)
    }

    /// Returns the user's API keys in creation order.
    pub fn list_api_keys(&self, user_id: RecordId) -> ServiceResult<Vec<ApiKey>> {
        Ok(self.get_user(user_id)?.api_keys)
    }
}
