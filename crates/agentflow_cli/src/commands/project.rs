//! `agentflow project` commands.

use crate::commands::require_user;
use crate::{detail, status, Context};
use agentflow_core::{JsonStore, ProjectService, UserService};
use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub enum ProjectCommand {
    /// Create a project inside an organization.
    Create {
        name: String,
        /// Unique within the organization; may repeat across organizations.
        slug: String,
        /// Organization slug the project belongs to.
        #[arg(long = "org")]
        organization: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long = "github-url")]
        github_url: Option<String>,
    },
    /// List projects of an organization.
    List {
        /// Organization slug to list projects for.
        #[arg(long = "org")]
        organization: String,
    },
}

pub fn run(ctx: &Context, command: ProjectCommand) -> anyhow::Result<()> {
    let store = JsonStore::new(&ctx.data_dir);
    require_user(ctx, &UserService::new(store.clone()))?;
    let service = ProjectService::new(store);

    match command {
        ProjectCommand::Create {
            name,
            slug,
            organization,
            description,
            github_url,
        } => {
            let project = service.create(&organization, &name, &slug, description, github_url)?;
            status(format!("Project '{}' created", project.name));
            detail(format!("Slug: {}", project.slug));
            detail(format!("ID:   {}", project.id));
            Ok(())
        }
        ProjectCommand::List { organization } => {
            let projects = service.list(&organization)?;
            if projects.is_empty() {
                status(format!("No projects found in '{organization}'."));
                return Ok(());
            }

            status(format!("Projects in '{organization}':"));
            for project in projects {
                let active = if project.is_active { "" } else { " (inactive)" };
                detail(format!("{} (slug: {}){active}", project.name, project.slug));
            }
            Ok(())
        }
    }
}
