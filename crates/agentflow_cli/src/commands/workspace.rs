//! `agentflow-ws` commands: init, config and workspace management.

use crate::{detail, status, Context};
use agentflow_core::db::open_db;
use agentflow_core::{SqliteWorkspaceRepository, Workspace, WorkspaceService};
use anyhow::{bail, Context as _};
use clap::Subcommand;
use std::path::{Path, PathBuf};

#[derive(Debug, Subcommand)]
pub enum WsCommand {
    /// Configure the workspace database and test the connection.
    Init {
        /// SQLite database file to use.
        #[arg(long = "db-path")]
        db_path: PathBuf,
    },
    /// Configuration management.
    #[command(subcommand)]
    Config(ConfigCommand),
    /// Workspace management.
    #[command(subcommand)]
    Workspace(WorkspaceCommand),
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the current configuration.
    Show,
    /// Test the database connection.
    Test,
}

#[derive(Debug, Subcommand)]
pub enum WorkspaceCommand {
    /// Create a new workspace.
    Create {
        name: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// List all workspaces.
    List,
    /// Switch to a different workspace by ID or name.
    Switch { identifier: String },
    /// Show the current workspace.
    Current,
}

pub fn run(ctx: &mut Context, command: WsCommand) -> anyhow::Result<()> {
    match command {
        WsCommand::Init { db_path } => init(ctx, db_path),
        WsCommand::Config(command) => config(ctx, command),
        WsCommand::Workspace(command) => workspace(ctx, command),
    }
}

fn init(ctx: &mut Context, db_path: PathBuf) -> anyhow::Result<()> {
    status("Testing connection...");
    test_connection(&db_path)?;
    status("Connection successful!");

    ctx.config.db_path = Some(db_path);
    ctx.save_config()?;
    status(format!(
        "Configuration saved to {}",
        agentflow_core::paths::config_file(&ctx.data_dir).display()
    ));
    Ok(())
}

fn config(ctx: &Context, command: ConfigCommand) -> anyhow::Result<()> {
    let db_path = configured_db_path(ctx)?;
    match command {
        ConfigCommand::Show => {
            status("Current configuration:");
            detail(format!("Database: {}", db_path.display()));
            match ctx.config.current_workspace_id {
                Some(id) => detail(format!("Current workspace: {id}")),
                None => detail("Current workspace: none"),
            }
            Ok(())
        }
        ConfigCommand::Test => {
            status("Testing connection...");
            test_connection(&db_path)?;
            status("Connection successful!");
            Ok(())
        }
    }
}

fn workspace(ctx: &mut Context, command: WorkspaceCommand) -> anyhow::Result<()> {
    let db_path = configured_db_path(ctx)?;
    let conn = open_db(&db_path).context("failed to open the workspace database")?;
    let service = WorkspaceService::new(SqliteWorkspaceRepository::new(&conn));

    match command {
        WorkspaceCommand::Create { name, description } => {
            let created = service.create(&name, description)?;
            if created.is_first {
                ctx.config.current_workspace_id = Some(created.workspace.id);
                ctx.save_config()?;
                status("This is your first workspace. Set as current.");
            }
            status(format!(
                "Workspace '{}' created (id: {})",
                created.workspace.name, created.workspace.id
            ));
            Ok(())
        }
        WorkspaceCommand::List => {
            let workspaces = service.list()?;
            if workspaces.is_empty() {
                status("No workspaces found. Create one with 'agentflow-ws workspace create'.");
                return Ok(());
            }

            status("Workspaces:");
            for workspace in workspaces {
                let current = if ctx.config.current_workspace_id == Some(workspace.id) {
                    " (current)"
                } else {
                    ""
                };
                detail(format!("{}{current}", workspace.name));
                detail(format!("  ID: {}", workspace.id));
            }
            Ok(())
        }
        WorkspaceCommand::Switch { identifier } => {
            let workspace = match service.resolve(&identifier) {
                Ok(workspace) => workspace,
                Err(agentflow_core::RepoError::NotFound(_)) => bail!(
                    "Workspace '{identifier}' not found. \
                     Use 'agentflow-ws workspace list' to see available workspaces."
                ),
                Err(err) => return Err(err.into()),
            };

            ctx.config.current_workspace_id = Some(workspace.id);
            ctx.save_config()?;
            status(format!("Switched to workspace: {}", workspace.name));
            Ok(())
        }
        WorkspaceCommand::Current => {
            let Some(current_id) = ctx.config.current_workspace_id else {
                bail!("No workspace selected. Use 'agentflow-ws workspace switch <name>' first.");
            };
            let workspace = service.get(current_id)?;
            print_workspace(&workspace);
            Ok(())
        }
    }
}

fn print_workspace(workspace: &Workspace) {
    status("Current workspace:");
    detail(format!("Name: {}", workspace.name));
    detail(format!("ID:   {}", workspace.id));
    if let Some(description) = &workspace.description {
        detail(format!("Description: {description}"));
    }
    detail(format!("Created at: {}", workspace.created_at));
}

fn configured_db_path(ctx: &Context) -> anyhow::Result<PathBuf> {
    match &ctx.config.db_path {
        Some(path) => Ok(path.clone()),
        None => bail!("No configuration found. Run 'agentflow-ws init' first."),
    }
}

/// Opening applies pragmas and migrations, so it doubles as the test.
fn test_connection(db_path: &Path) -> anyhow::Result<()> {
    open_db(db_path)
        .map(drop)
        .with_context(|| format!("connection failed for {}", db_path.display()))
}
