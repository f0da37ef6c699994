//! Core domain logic for the AgentFlow CLI tools.
//! This crate is the single source of truth for record invariants.

pub mod auth;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod paths;
pub mod repo;
pub mod service;
pub mod store;

pub use auth::{generate_api_key, hash_password, verify_password, API_KEY_PREFIX};
pub use config::{CliConfig, ConfigError};
pub use logging::{default_log_level, init_logging};
pub use model::record::{
    ApiKey, Database, Organization, Project, RecordId, User, ValidationError,
};
pub use model::workspace::Workspace;
pub use repo::workspace_repo::{RepoError, RepoResult, SqliteWorkspaceRepository, WorkspaceRepository};
pub use service::org_service::OrganizationService;
pub use service::project_service::ProjectService;
pub use service::user_service::UserService;
pub use service::workspace_service::{CreatedWorkspace, WorkspaceService};
pub use service::{ServiceError, ServiceResult};
pub use store::{JsonStore, StoreError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
