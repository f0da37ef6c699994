//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate load-snapshot, validate, uniqueness-check, append, save
//!   sequences over the JSON store.
//! - Keep CLI layers decoupled from storage details.
//!
//! # Invariants
//! - Every uniqueness predicate is checked against a fresh snapshot before
//!   the append, and the whole store is saved in one atomic replacement.
//! - The check-then-act span is not protected against concurrent processes;
//!   simultaneous invocations are last-write-wins.

use crate::model::record::ValidationError;
use crate::store::StoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod org_service;
pub mod project_service;
pub mod user_service;
pub mod workspace_service;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Domain error taxonomy shared by all record services.
///
/// Everything here is non-fatal: the CLI converts it into a message and a
/// non-zero exit status.
#[derive(Debug)]
pub enum ServiceError {
    Validation(ValidationError),
    /// A creation violated a uniqueness invariant.
    Conflict(String),
    /// A lookup by id/slug/email yielded no match.
    NotFound(String),
    /// Unknown email or wrong password; deliberately indistinguishable.
    InvalidCredentials,
    Store(StoreError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Conflict(message) => write!(f, "{message}"),
            Self::NotFound(message) => write!(f, "{message}"),
            Self::InvalidCredentials => write!(f, "invalid credentials"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}
