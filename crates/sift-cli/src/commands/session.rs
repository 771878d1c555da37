use sift_core::entities::GenericSearchSession;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SessionCommands;
use crate::commands::shared::limit::limited;
use crate::context::AppContext;
use crate::output::output;

/// Handle `sift session`.
pub async fn handle(
    action: &SessionCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let svc = &ctx.service;
    match action {
        SessionCommands::Create {
            review,
            search,
            source,
        } => {
            let session = svc
                .create_search_session(review, source.as_deref(), search)
                .await?;
            tracing::info!(id = %session.id, "created search session");
            output(&session, flags.format)
        }
        SessionCommands::Get { id } => output(&svc.get_search_session(id).await?, flags.format),
        SessionCommands::Update { id, search } => {
            output(&svc.update_search_session(id, search).await?, flags.format)
        }
        SessionCommands::Delete { id } => {
            svc.delete_search_session(id).await?;
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
        SessionCommands::List { review } => {
            output(&limited(svc.search_sessions_of(review).await?, ctx, flags), flags.format)
        }
        SessionCommands::Generic { review } => {
            output(&svc.generic_search_session_of(review).await?, flags.format)
        }
        SessionCommands::SaveGeneric { review, search } => {
            let generic = match svc.generic_search_session_of(review).await? {
                GenericSearchSession::Saved(mut session) => {
                    session.search_string.clone_from(search);
                    GenericSearchSession::Saved(session)
                }
                GenericSearchSession::Draft { review_id, .. } => GenericSearchSession::Draft {
                    review_id,
                    search_string: search.clone(),
                },
            };
            output(&svc.save_generic_search_session(&generic).await?, flags.format)
        }
    }
}
