//! Well-known file locations under the per-user data directory.
//!
//! Everything AgentFlow persists lives under one directory (default
//! `~/.agentflow`): the record store, the CLI config and rotated log files.
//! Tests substitute a temporary directory instead of patching globals.

use std::path::{Path, PathBuf};

pub const DATA_DIR_NAME: &str = ".agentflow";
pub const DATA_FILE_NAME: &str = "data.json";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOG_DIR_NAME: &str = "logs";

/// Returns `~/.agentflow`, or `None` when the home directory is unknown.
pub fn default_data_dir() -> Option<PathBuf> {
    home::home_dir().map(|dir| dir.join(DATA_DIR_NAME))
}

/// Record store document inside a data directory.
pub fn data_file(data_dir: &Path) -> PathBuf {
    data_dir.join(DATA_FILE_NAME)
}

/// CLI config document inside a data directory.
pub fn config_file(data_dir: &Path) -> PathBuf {
    data_dir.join(CONFIG_FILE_NAME)
}

/// Directory holding rotated log files.
pub fn log_dir(data_dir: &Path) -> PathBuf {
    data_dir.join(LOG_DIR_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn files_are_nested_under_the_data_dir() {
        let dir = Path::new("/tmp/agentflow-test");
        assert_eq!(data_file(dir), dir.join("data.json"));
        assert_eq!(config_file(dir), dir.join("config.json"));
        assert_eq!(log_dir(dir), dir.join("logs"));
    }
}
