//! `agentflow auth` commands: register, login, status and API keys.

use crate::commands::require_user;
use crate::{detail, status, Context};
use agentflow_core::{JsonStore, ServiceError, UserService};
use anyhow::bail;
use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub enum AuthCommand {
    /// Register a new user account.
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        name: String,
    },
    /// Sign in with email and password.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Show the current authentication state.
    Status,
    /// Manage API keys for the signed-in user.
    #[command(subcommand)]
    ApiKeys(ApiKeysCommand),
}

#[derive(Debug, Subcommand)]
pub enum ApiKeysCommand {
    /// List the user's API keys.
    List,
    /// Create a new API key.
    Create {
        #[arg(long)]
        name: String,
    },
}

pub fn run(ctx: &mut Context, command: AuthCommand) -> anyhow::Result<()> {
    let service = UserService::new(JsonStore::new(&ctx.data_dir));

    match command {
        AuthCommand::Register {
            email,
            password,
            name,
        } => register(ctx, &service, &email, &password, &name),
        AuthCommand::Login { email, password } => login(ctx, &service, &email, &password),
        AuthCommand::Status => show_status(ctx, &service),
        AuthCommand::ApiKeys(ApiKeysCommand::List) => list_keys(ctx, &service),
        AuthCommand::ApiKeys(ApiKeysCommand::Create { name }) => create_key(ctx, &service, &name),
    }
}

fn register(
    ctx: &mut Context,
    service: &UserService,
    email: &str,
    password: &str,
    name: &str,
) -> anyhow::Result<()> {
    let user = match service.register(email, password, name) {
        Ok(user) => user,
        Err(ServiceError::Conflict(_)) => bail!("User already exists: {email}"),
        Err(err) => return Err(err.into()),
    };

    // Registering also signs the user in.
    ctx.config.current_user_id = Some(user.id);
    ctx.save_config()?;

    status("User registered successfully");
    detail(format!("Email: {}", user.email));
    if let Some(key) = user.api_keys.first() {
        detail(format!("API key: {}", key.key));
        detail("Store this key now; it is shown only once.");
    }
    Ok(())
}

fn login(
    ctx: &mut Context,
    service: &UserService,
    email: &str,
    password: &str,
) -> anyhow::Result<()> {
    let user = match service.login(email, password) {
        Ok(user) => user,
        Err(ServiceError::InvalidCredentials) => bail!("Invalid credentials"),
        Err(err) => return Err(err.into()),
    };

    ctx.config.current_user_id = Some(user.id);
    ctx.save_config()?;

    status(format!("Logged in successfully as {}", user.email));
    Ok(())
}

fn show_status(ctx: &Context, service: &UserService) -> anyhow::Result<()> {
    // Signed-out status is informational, not a failure.
    let Some(user_id) = ctx.config.current_user_id else {
        status("Not authenticated");
        return Ok(());
    };

    match service.get_user(user_id) {
        Ok(user) => {
            status("Authenticated");
            detail(format!("Email: {}", user.email));
            detail(format!("Name:  {}", user.name));
        }
        Err(ServiceError::NotFound(_)) => status("Not authenticated"),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

fn list_keys(ctx: &Context, service: &UserService) -> anyhow::Result<()> {
    let user = require_user(ctx, service)?;
    let keys = service.list_api_keys(user.id)?;

    println!("{:<24} {:<12} {:<8} KEY", "NAME", "CREATED", "ACTIVE");
    for key in keys {
        println!(
            "{:<24} {:<12} {:<8} {}...",
            key.name,
            key.created_at.format("%Y-%m-%d"),
            if key.is_active { "yes" } else { "no" },
            &key.key[..key.key.len().min(12)]
        );
    }
    Ok(())
}

fn create_key(ctx: &Context, service: &UserService, name: &str) -> anyhow::Result<()> {
    let user = require_user(ctx, service)?;
    let key = service.create_api_key(user.id, name)?;

    status("API key created");
    detail(format!("Name: {}", key.name));
    detail(format!("Key:  {}", key.key));
    detail("Store this key now; it is shown only once.");
    Ok(())
}
