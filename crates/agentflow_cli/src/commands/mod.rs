//! Subcommand trees for both binaries.

pub mod auth;
pub mod org;
pub mod project;
pub mod workspace;

use crate::Context;
use agentflow_core::{RecordId, User, UserService};
use anyhow::bail;

/// Resolves the signed-in user from the stored session, or fails with the
/// standard not-authenticated message.
pub(crate) fn require_user(ctx: &Context, service: &UserService) -> anyhow::Result<User> {
    let Some(user_id) = ctx.config.current_user_id else {
        bail!("Not authenticated. Run 'agentflow auth login' first.");
    };
    current_user(service, user_id)
}

fn current_user(service: &UserService, user_id: RecordId) -> anyhow::Result<User> {
    match service.get_user(user_id) {
        Ok(user) => Ok(user),
        // A stale session id (store wiped) reads as signed out.
        Err(agentflow_core::ServiceError::NotFound(_)) => {
            bail!("Not authenticated. Run 'agentflow auth login' first.")
        }
        Err(err) => Err(err.into()),
    }
}
