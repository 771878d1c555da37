use sift_db::error::DatabaseError;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::UserCommands;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

/// Handle `sift user`.
pub async fn handle(action: &UserCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let svc = &ctx.service;
    match action {
        UserCommands::Create { username, email } => {
            let user = svc.create_user(username, email.as_deref()).await?;
            tracing::info!(id = %user.id, "created user");
            output(&user, flags.format)
        }
        UserCommands::Get { id } => {
            let user = match svc.get_user(id).await {
                Err(DatabaseError::NoResult) => svc.get_user_by_username(id).await?,
                other => other?,
            };
            output(&user, flags.format)
        }
        UserCommands::List => {
            let limit = effective_limit(flags.limit, ctx.config.general.default_limit);
            output(&svc.list_users(limit).await?, flags.format)
        }
        UserCommands::Delete { id } => {
            svc.delete_user(id).await?;
            tracing::info!(%id, "deleted user");
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
    }
}
