//! Workspace creation and selection for the database-backed tool.
//!
//! # Invariants
//! - Workspace names stay unique; duplicates are rejected before insert.
//! - `switch` resolves identifiers by id first, then by name.

use crate::model::record::RecordId;
use crate::model::workspace::Workspace;
use crate::repo::workspace_repo::{RepoError, RepoResult, WorkspaceRepository};
use log::info;
use uuid::Uuid;

/// Outcome of a workspace creation, so callers can promote the first
/// workspace to the current one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedWorkspace {
    pub workspace: Workspace,
    pub is_first: bool,
}

/// Use-case service wrapper over a workspace repository.
pub struct WorkspaceService<R: WorkspaceRepository> {
    repo: R,
}

impl<R: WorkspaceRepository> WorkspaceService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a workspace, rejecting duplicate names with `Conflict`.
    pub fn create(&self, name: &str, description: Option<String>) -> RepoResult<CreatedWorkspace> {
        if self.repo.get_by_name(name)?.is_some() {
            return Err(RepoError::Conflict(name.to_string()));
        }

        let workspace = Workspace::new(name, description);
        self.repo.create_workspace(&workspace)?;
        let is_first = self.repo.list_all()?.len() == 1;

        info!(
            "event=workspace_create module=service status=ok workspace_id={} is_first={is_first}",
            workspace.id
        );
        Ok(CreatedWorkspace {
            workspace,
            is_first,
        })
    }

    /// Resolves a workspace by id when the identifier parses as a UUID,
    /// falling back to a name lookup.
    pub fn resolve(&self, identifier: &str) -> RepoResult<Workspace> {
        if let Ok(id) = Uuid::parse_str(identifier) {
            if let Some(workspace) = self.repo.get_by_id(id)? {
                return Ok(workspace);
            }
        }
        self.repo
            .get_by_name(identifier)?
            .ok_or_else(|| RepoError::NotFound(identifier.to_string()))
    }

    /// Fetches a workspace by its stored id.
    pub fn get(&self, id: RecordId) -> RepoResult<Workspace> {
        self.repo
            .get_by_id(id)?
            .ok_or_else(|| RepoError::NotFound(id.to_string()))
    }

    /// Lists all workspaces in creation order.
    pub fn list(&self) -> RepoResult<Vec<Workspace>> {
        self.repo.list_all()
    }
}
