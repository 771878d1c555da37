use sift_db::updates::source::SourceUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SourceCommands;
use crate::commands::shared::limit::limited;
use crate::context::AppContext;
use crate::output::output;

/// Handle `sift source`.
pub async fn handle(
    action: &SourceCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let svc = &ctx.service;
    match action {
        SourceCommands::Create {
            name,
            url,
            is_default,
        } => {
            let source = svc.create_source(name, url, *is_default).await?;
            tracing::info!(id = %source.id, "created source");
            output(&source, flags.format)
        }
        SourceCommands::Get { id } => output(&svc.get_source(id).await?, flags.format),
        SourceCommands::Update {
            id,
            name,
            url,
            is_default,
        } => {
            let mut builder = SourceUpdateBuilder::new();
            if let Some(name) = name {
                builder = builder.name(name);
            }
            if let Some(url) = url {
                builder = builder.url(url);
            }
            if let Some(is_default) = is_default {
                builder = builder.is_default(*is_default);
            }
            output(&svc.update_source(id, builder.build()).await?, flags.format)
        }
        SourceCommands::List { defaults } => {
            let sources = if *defaults {
                svc.default_sources().await?
            } else {
                svc.list_sources().await?
            };
            output(&limited(sources, ctx, flags), flags.format)
        }
        SourceCommands::Delete { id } => {
            svc.delete_source(id).await?;
            tracing::info!(%id, "deleted source");
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
    }
}
