use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::User { action } => commands::user::handle(&action, ctx, flags).await,
        Commands::Source { action } => commands::source::handle(&action, ctx, flags).await,
        Commands::Review { action } => commands::review::handle(&action, ctx, flags).await,
        Commands::Question { action } => commands::question::handle(&action, ctx, flags).await,
        Commands::Criteria { action } => commands::criteria::handle(&action, ctx, flags).await,
        Commands::Keyword { action } => commands::keyword::handle(&action, ctx, flags).await,
        Commands::Session { action } => commands::session::handle(&action, ctx, flags).await,
        Commands::Article { action } => commands::article::handle(&action, ctx, flags).await,
        Commands::Quality { action } => commands::quality::handle(&action, ctx, flags).await,
        Commands::Extraction { action } => {
            commands::extraction::handle(&action, ctx, flags).await
        }
    }
}
