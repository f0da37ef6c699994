//! JSON document store with atomic replacement.
//!
//! # Responsibility
//! - Read the full `Database` snapshot from `<data_dir>/data.json`.
//! - Rewrite the full document via write-to-temp-then-rename so a crash
//!   mid-write never leaves a truncated store behind.
//!
//! # Invariants
//! - `load` never creates files; a missing document is the empty state.
//! - `save` creates the data directory on demand.
//! - Concurrent invocations are last-write-wins at file granularity; there
//!   is no cross-process lock.

use crate::model::record::Database;
use crate::paths;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence failure for the JSON record store.
#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Serde(serde_json::Error),
    HomeDirUnavailable,
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "store I/O failure: {err}"),
            Self::Serde(err) => write!(f, "store document is not valid JSON: {err}"),
            Self::HomeDirUnavailable => {
                write!(f, "cannot resolve home directory for the default store path")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serde(err) => Some(err),
            Self::HomeDirUnavailable => None,
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value)
    }
}

/// Handle on a data directory; owns no in-memory state between calls.
#[derive(Debug, Clone)]
pub struct JsonStore {
    data_dir: PathBuf,
}

impl JsonStore {
    /// Creates a store rooted at an explicit data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Creates a store rooted at `~/.agentflow`.
    pub fn open_default() -> StoreResult<Self> {
        let data_dir = paths::default_data_dir().ok_or(StoreError::HomeDirUnavailable)?;
        Ok(Self::new(data_dir))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn data_file(&self) -> PathBuf {
        paths::data_file(&self.data_dir)
    }

    /// Loads the full document, or an empty `Database` when it does not
    /// exist yet.
    pub fn load(&self) -> StoreResult<Database> {
        let path = self.data_file();
        if !path.exists() {
            return Ok(Database::default());
        }

        let bytes = fs::read(&path)?;
        match serde_json::from_slice(&bytes) {
            Ok(db) => Ok(db),
            Err(err) => {
                error!(
                    "event=store_load module=store status=error path={} error={err}",
                    path.display()
                );
                Err(err.into())
            }
        }
    }

    /// Serializes the full document and atomically replaces the file.
    pub fn save(&self, db: &Database) -> StoreResult<()> {
        fs::create_dir_all(&self.data_dir)?;

        let path = self.data_file();
        let tmp_path = path.with_extension("json.tmp");
        let payload = serde_json::to_vec_pretty(db)?;

        fs::write(&tmp_path, payload)?;
        if let Err(err) = fs::rename(&tmp_path, &path) {
            // Leave no stale temp file behind on a failed replace.
            let _ = fs::remove_file(&tmp_path);
            return Err(err.into());
        }

        info!(
            "event=store_save module=store status=ok path={} users={} organizations={} projects={}",
            path.display(),
            db.users.len(),
            db.organizations.len(),
            db.projects.len()
        );
        Ok(())
    }
}
