//! Record types for the JSON-backed store.
//!
//! # Responsibility
//! - Define users, API keys, organizations and projects plus the `Database`
//!   aggregate that is serialized as one document.
//! - Keep field-level validation explicit and reusable across services.
//!
//! # Invariants
//! - `User.email` is unique across all users (as stored, no normalization).
//! - `Organization.slug` is unique across all organizations.
//! - `Project.slug` is unique only within its `organization_id`.
//! - Referential integrity (`owner_id`, `organization_id`) is enforced by
//!   callers, not by the model or the store.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier shared by every record type.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type RecordId = Uuid;

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MAX_NAME_LEN: usize = 255;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid"));
static SLUG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("slug pattern is valid"));

/// Field-level validation failure, reported before any mutation is attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    InvalidEmail(String),
    PasswordTooShort { min: usize },
    NameEmpty,
    NameTooLong { max: usize },
    InvalidSlug(String),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEmail(email) => write!(f, "invalid email address `{email}`"),
            Self::PasswordTooShort { min } => {
                write!(f, "password must be at least {min} characters")
            }
            Self::NameEmpty => write!(f, "name cannot be empty"),
            Self::NameTooLong { max } => write!(f, "name must be at most {max} characters"),
            Self::InvalidSlug(slug) => write!(
                f,
                "invalid slug `{slug}`; expected lowercase letters, digits and single dashes"
            ),
        }
    }
}

impl Error for ValidationError {}

/// Validates an email address against a deliberately loose pattern.
///
/// The store keeps emails as given; case folding or IDN handling is out of
/// scope for a local tool.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if EMAIL_PATTERN.is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail(email.to_string()))
    }
}

/// Validates the plaintext password length before hashing.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort {
            min: MIN_PASSWORD_LEN,
        });
    }
    Ok(())
}

/// Validates display names used by users, keys, organizations and projects.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::NameEmpty);
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::NameTooLong { max: MAX_NAME_LEN });
    }
    Ok(())
}

/// Validates a URL-safe slug.
pub fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    if SLUG_PATTERN.is_match(slug) {
        Ok(())
    } else {
        Err(ValidationError::InvalidSlug(slug.to_string()))
    }
}

/// Bearer credential owned by a user.
///
/// The token in `key` is stored as an opaque string; the store never
/// interprets it beyond equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKey {
    pub id: RecordId,
    pub key: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub last_used_at: Option<DateTime<Utc>>,
    pub is_active: bool,
}

impl ApiKey {
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            key: key.into(),
            name: name.into(),
            created_at: Utc::now(),
            last_used_at: None,
            is_active: true,
        }
    }
}

/// Registered account. Holds only the password digest, never plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub api_keys: Vec<ApiKey>,
}

impl User {
    pub fn new(
        email: impl Into<String>,
        password_hash: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            password_hash: password_hash.into(),
            name: name.into(),
            created_at: Utc::now(),
            api_keys: Vec::new(),
        }
    }
}

/// Organization owned by a user; `slug` is globally unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: RecordId,
    pub owner_id: RecordId,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Organization {
    pub fn new(
        owner_id: RecordId,
        name: impl Into<String>,
        slug: impl Into<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id,
            name: name.into(),
            slug: slug.into(),
            description,
            created_at: Utc::now(),
        }
    }
}

/// Project inside an organization; `slug` is unique per organization only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: RecordId,
    pub organization_id: RecordId,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub github_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Project {
    pub fn new(
        organization_id: RecordId,
        name: impl Into<String>,
        slug: impl Into<String>,
        description: Option<String>,
        github_url: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            organization_id,
            name: name.into(),
            slug: slug.into(),
            description,
            github_url,
            is_active: true,
            created_at: Utc::now(),
        }
    }
}

/// Aggregate root serialized as one JSON document.
///
/// All three collections are insertion-ordered; query functions rely on that
/// order for deterministic results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Database {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub organizations: Vec<Organization>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_validation_accepts_plain_addresses() {
        assert!(validate_email("dev@example.com").is_ok());
        assert!(validate_email("a.b+tag@sub.example.io").is_ok());
    }

    #[test]
    fn email_validation_rejects_malformed_input() {
        for bad in ["invalid-email", "no@tld", "two@@example.com", "a b@example.com"] {
            assert!(validate_email(bad).is_err(), "expected rejection: {bad}");
        }
    }

    #[test]
    fn password_validation_enforces_minimum_length() {
        assert_eq!(
            validate_password("pass"),
            Err(ValidationError::PasswordTooShort { min: 8 })
        );
        assert!(validate_password("password123").is_ok());
    }

    #[test]
    fn name_validation_enforces_bounds() {
        assert_eq!(validate_name("   "), Err(ValidationError::NameEmpty));
        assert_eq!(
            validate_name(&"A".repeat(256)),
            Err(ValidationError::NameTooLong { max: 255 })
        );
        assert!(validate_name(&"A".repeat(255)).is_ok());
    }

    #[test]
    fn slug_validation_accepts_dashed_lowercase() {
        assert!(validate_slug("acme").is_ok());
        assert!(validate_slug("acme-web-2").is_ok());
        for bad in ["Acme", "acme_web", "-acme", "acme-", "a--b", ""] {
            assert!(validate_slug(bad).is_err(), "expected rejection: {bad}");
        }
    }

    #[test]
    fn new_records_get_distinct_ids_and_defaults() {
        let a = User::new("a@example.com", "digest", "A");
        let b = User::new("b@example.com", "digest", "B");
        assert_ne!(a.id, b.id);
        assert!(a.api_keys.is_empty());

        let key = ApiKey::new("afk_token", "Default Key");
        assert!(key.is_active);
        assert!(key.last_used_at.is_none());

        let project = Project::new(Uuid::new_v4(), "Web", "web", None, None);
        assert!(project.is_active);
    }
}
