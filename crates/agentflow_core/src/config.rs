//! CLI config: session and current-workspace context.
//!
//! # Responsibility
//! - Persist the mutable invocation context (`config.json`) separately from
//!   the record store.
//!
//! # Invariants
//! - The config is an explicit value loaded once per invocation and threaded
//!   through command handlers; there is no ambient global.
//! - A missing config file loads as defaults, never as an error.

use crate::paths;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Serde(serde_json::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "config I/O failure: {err}"),
            Self::Serde(err) => write!(f, "config file is not valid JSON: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serde(err) => Some(err),
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value)
    }
}

/// Per-user invocation context shared by both binaries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Signed-in user; set by `auth register` and `auth login`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_user_id: Option<Uuid>,
    /// Selected workspace for the database-backed tool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_workspace_id: Option<Uuid>,
    /// SQLite database location configured by `agentflow-ws init`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_path: Option<PathBuf>,
}

impl CliConfig {
    /// Loads the config from a data directory; missing file yields defaults.
    pub fn load(data_dir: &Path) -> ConfigResult<Self> {
        let path = paths::config_file(data_dir);
        if !path.exists() {
            return Ok(Self::default());
        }
        let bytes = fs::read(&path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Persists the config, creating the data directory on demand.
    pub fn save(&self, data_dir: &Path) -> ConfigResult<()> {
        fs::create_dir_all(data_dir)?;
        let payload = serde_json::to_vec_pretty(self)?;
        fs::write(paths::config_file(data_dir), payload)?;
        Ok(())
    }

    /// Whether any config has been persisted in this data directory.
    pub fn exists(data_dir: &Path) -> bool {
        paths::config_file(data_dir).exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_config_loads_as_defaults() {
        let dir = TempDir::new().unwrap();
        let config = CliConfig::load(dir.path()).unwrap();
        assert_eq!(config, CliConfig::default());
        assert!(!CliConfig::exists(dir.path()));
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let config = CliConfig {
            current_user_id: Some(Uuid::new_v4()),
            current_workspace_id: None,
            db_path: Some(dir.path().join("agentflow.db")),
        };

        config.save(dir.path()).unwrap();
        assert!(CliConfig::exists(dir.path()));
        assert_eq!(CliConfig::load(dir.path()).unwrap(), config);
    }

    #[test]
    fn unset_fields_are_omitted_from_the_document() {
        let dir = TempDir::new().unwrap();
        CliConfig::default().save(dir.path()).unwrap();

        let raw = std::fs::read_to_string(dir.path().join("config.json")).unwrap();
        assert!(!raw.contains("current_user_id"));
        assert!(!raw.contains("db_path"));
    }
}
