//! Workspace record for the database-backed tool.
//!
//! Workspaces live in SQLite rather than the JSON document; the record shape
//! mirrors the JSON records (stable UUID, creation timestamp) so both tools
//! stay consistent.

use crate::model::record::RecordId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Named working context selected by `agentflow-ws workspace switch`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    pub id: RecordId,
    /// Unique across all workspaces; also accepted as a switch identifier.
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Workspace {
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description,
            created_at: Utc::now(),
        }
    }
}
