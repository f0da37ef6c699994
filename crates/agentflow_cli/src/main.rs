//! `agentflow` — local JSON-backed CLI for users, organizations and projects.

use agentflow_cli::commands::{auth, org, project};
use agentflow_cli::{detail, init_logging, status, Context};
use agentflow_core::paths;
use clap::{Parser, Subcommand};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "agentflow", about = "AgentFlow CLI (local JSON storage)")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Authentication and API keys.
    #[command(subcommand)]
    Auth(auth::AuthCommand),
    /// Organization management.
    #[command(subcommand)]
    Org(org::OrgCommand),
    /// Project management.
    #[command(subcommand)]
    Project(project::ProjectCommand),
    /// Show version and data locations.
    Version,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("[!] {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut ctx = Context::load()?;
    init_logging(&ctx);

    match cli.command {
        Command::Auth(command) => auth::run(&mut ctx, command),
        Command::Org(command) => org::run(&ctx, command),
        Command::Project(command) => project::run(&ctx, command),
        Command::Version => {
            status(format!("AgentFlow CLI v{}", agentflow_core::core_version()));
            status("Data locations:");
            detail(format!(
                "Config: {}",
                paths::config_file(&ctx.data_dir).display()
            ));
            detail(format!(
                "Data:   {}",
                paths::data_file(&ctx.data_dir).display()
            ));
            Ok(())
        }
    }
}
