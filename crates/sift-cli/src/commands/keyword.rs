use sift_db::updates::keyword::KeywordUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::KeywordCommands;
use crate::commands::shared::limit::limited;
use crate::context::AppContext;
use crate::output::output;

/// Handle `sift keyword`.
pub async fn handle(
    action: &KeywordCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let svc = &ctx.service;
    match action {
        KeywordCommands::Create {
            review,
            description,
            synonym_of,
        } => {
            let keyword = svc
                .create_keyword(review, description, synonym_of.as_deref())
                .await?;
            tracing::info!(id = %keyword.id, "created keyword");
            output(&keyword, flags.format)
        }
        KeywordCommands::Get { id } => output(&svc.get_keyword(id).await?, flags.format),
        KeywordCommands::Update {
            id,
            description,
            synonym_of,
            root,
        } => {
            let mut builder = KeywordUpdateBuilder::new();
            if let Some(description) = description {
                builder = builder.description(description);
            }
            if *root {
                builder = builder.synonym_of(None);
            } else if let Some(target) = synonym_of {
                builder = builder.synonym_of(Some(target.clone()));
            }
            output(&svc.update_keyword(id, builder.build()).await?, flags.format)
        }
        KeywordCommands::Delete { id } => {
            svc.delete_keyword(id).await?;
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
        KeywordCommands::List { review, roots } => {
            let keywords = if *roots {
                svc.root_keywords_of(review).await?
            } else {
                svc.keywords_of(review).await?
            };
            output(&limited(keywords, ctx, flags), flags.format)
        }
        KeywordCommands::Synonyms { id } => {
            output(&limited(svc.synonyms_of(id).await?, ctx, flags), flags.format)
        }
    }
}
