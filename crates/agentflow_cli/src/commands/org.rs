//! `agentflow org` commands.

use crate::commands::require_user;
use crate::{detail, status, Context};
use agentflow_core::{JsonStore, OrganizationService, UserService};
use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub enum OrgCommand {
    /// Create an organization owned by the signed-in user.
    Create {
        name: String,
        /// Globally unique URL-safe identifier.
        slug: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// List organizations owned by the signed-in user.
    List,
}

pub fn run(ctx: &Context, command: OrgCommand) -> anyhow::Result<()> {
    let store = JsonStore::new(&ctx.data_dir);
    let user = require_user(ctx, &UserService::new(store.clone()))?;
    let service = OrganizationService::new(store);

    match command {
        OrgCommand::Create {
            name,
            slug,
            description,
        } => {
            let org = service.create(user.id, &name, &slug, description)?;
            status(format!("Organization '{}' created", org.name));
            detail(format!("Slug: {}", org.slug));
            detail(format!("ID:   {}", org.id));
            Ok(())
        }
        OrgCommand::List => {
            let orgs = service.list_owned(user.id)?;
            if orgs.is_empty() {
                status("No organizations found. Create one with 'agentflow org create'.");
                return Ok(());
            }

            status("Organizations:");
            for org in orgs {
                let description = org
                    .description
                    .map(|text| format!(" - {text}"))
                    .unwrap_or_default();
                detail(format!("{} (slug: {}){description}", org.name, org.slug));
            }
            Ok(())
        }
    }
}
