//! Workspace repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `workspaces` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `workspaces.name` stays unique; duplicates surface as `Conflict`.
//! - Read paths reject invalid persisted state instead of masking it.

use crate::db::DbError;
use crate::model::record::RecordId;
use crate::model::workspace::Workspace;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const WORKSPACE_SELECT_SQL: &str = "SELECT id, name, description, created_at FROM workspaces";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for workspace persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(String),
    Conflict(String),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(what) => write!(f, "workspace not found: {what}"),
            Self::Conflict(name) => write!(f, "workspace `{name}` already exists"),
            Self::InvalidData(message) => {
                write!(f, "invalid persisted workspace data: {message}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for workspace operations.
pub trait WorkspaceRepository {
    fn create_workspace(&self, workspace: &Workspace) -> RepoResult<RecordId>;
    fn get_by_id(&self, id: RecordId) -> RepoResult<Option<Workspace>>;
    fn get_by_name(&self, name: &str) -> RepoResult<Option<Workspace>>;
    fn list_all(&self) -> RepoResult<Vec<Workspace>>;
}

/// SQLite-backed workspace repository.
pub struct SqliteWorkspaceRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteWorkspaceRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl WorkspaceRepository for SqliteWorkspaceRepository<'_> {
    fn create_workspace(&self, workspace: &Workspace) -> RepoResult<RecordId> {
        let inserted = self.conn.execute(
            "INSERT INTO workspaces (id, name, description, created_at)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                workspace.id.to_string(),
                workspace.name.as_str(),
                workspace.description.as_deref(),
                workspace.created_at.to_rfc3339(),
            ],
        );

        match inserted {
            Ok(_) => Ok(workspace.id),
            Err(err) if is_unique_violation(&err) => {
                Err(RepoError::Conflict(workspace.name.clone()))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn get_by_id(&self, id: RecordId) -> RepoResult<Option<Workspace>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{WORKSPACE_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query(params![id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_workspace_row(row)?));
        }
        Ok(None)
    }

    fn get_by_name(&self, name: &str) -> RepoResult<Option<Workspace>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{WORKSPACE_SELECT_SQL} WHERE name = ?1;"))?;
        let mut rows = stmt.query(params![name])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_workspace_row(row)?));
        }
        Ok(None)
    }

    fn list_all(&self) -> RepoResult<Vec<Workspace>> {
        // rowid order preserves insertion order, matching the JSON store.
        let mut stmt = self
            .conn
            .prepare(&format!("{WORKSPACE_SELECT_SQL} ORDER BY rowid ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut workspaces = Vec::new();
        while let Some(row) = rows.next()? {
            workspaces.push(parse_workspace_row(row)?);
        }
        Ok(workspaces)
    }
}

fn parse_workspace_row(row: &Row<'_>) -> RepoResult<Workspace> {
    let id_text: String = row.get("id")?;
    let id = Uuid::parse_str(&id_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{id_text}` in workspaces.id"))
    })?;

    let created_at_text: String = row.get("created_at")?;
    let created_at = DateTime::parse_from_rfc3339(&created_at_text)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            RepoError::InvalidData(format!(
                "invalid timestamp `{created_at_text}` in workspaces.created_at"
            ))
        })?;

    Ok(Workspace {
        id,
        name: row.get("name")?,
        description: row.get("description")?,
        created_at,
    })
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(inner, _)
            if inner.code == rusqlite::ErrorCode::ConstraintViolation
    )
}
