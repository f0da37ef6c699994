//! Command handlers shared by the `agentflow` and `agentflow-ws` binaries.
//!
//! # Responsibility
//! - Parse arguments, thread the invocation context through handlers and
//!   turn domain errors into human-readable status lines.
//!
//! # Invariants
//! - Handlers receive the context as an explicit value; no handler reads
//!   ambient global state.
//! - Every failure propagates as an error; the binaries exit non-zero.

use agentflow_core::{paths, CliConfig};
use anyhow::{anyhow, Context as _};
use std::path::PathBuf;

pub mod commands;

/// Invocation context loaded once per process and passed to every handler.
pub struct Context {
    pub data_dir: PathBuf,
    pub config: CliConfig,
}

impl Context {
    /// Resolves the data directory (honoring `AGENTFLOW_HOME` for tests and
    /// sandboxes) and loads the persisted config.
    pub fn load() -> anyhow::Result<Self> {
        let data_dir = match std::env::var_os("AGENTFLOW_HOME") {
            Some(dir) => PathBuf::from(dir),
            None => paths::default_data_dir()
                .ok_or_else(|| anyhow!("cannot resolve home directory"))?,
        };
        let config = CliConfig::load(&data_dir).context("failed to load CLI config")?;
        Ok(Self { data_dir, config })
    }

    /// Persists the (possibly updated) config back to disk.
    pub fn save_config(&self) -> anyhow::Result<()> {
        self.config
            .save(&self.data_dir)
            .context("failed to save CLI config")
    }
}

/// Best-effort logging bootstrap; a failure here never blocks a command.
pub fn init_logging(ctx: &Context) {
    let log_dir = paths::log_dir(&ctx.data_dir);
    if let Err(err) = agentflow_core::init_logging(agentflow_core::default_log_level(), &log_dir) {
        log::debug!("logging disabled: {err}");
    }
}

/// Prints a success status line.
pub fn status(message: impl AsRef<str>) {
    println!("[*] {}", message.as_ref());
}

/// Prints an indented detail line under a status line.
pub fn detail(message: impl AsRef<str>) {
    println!("    {}", message.as_ref());
}
