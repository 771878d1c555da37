use sift_core::enums::{ReviewStatus, Strategy};
use sift_core::rules::slugify;
use sift_db::updates::review::ReviewUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ReviewCommands;
use crate::commands::shared::limit::{effective_limit, limited};
use crate::commands::shared::parse::parse_opt_enum;
use crate::context::AppContext;
use crate::output::output;

/// Handle `sift review`.
pub async fn handle(
    action: &ReviewCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let svc = &ctx.service;
    match action {
        ReviewCommands::Create {
            author,
            title,
            name,
            description,
            objective,
        } => {
            let name = name.clone().unwrap_or_else(|| slugify(title));
            let review = svc
                .create_review(author, &name, title, description, objective)
                .await?;
            tracing::info!(id = %review.id, name = %review.name, "created review");
            output(&review, flags.format)
        }
        ReviewCommands::Get { id } => output(&svc.get_review(id).await?, flags.format),
        ReviewCommands::List { user } => {
            let reviews = match user {
                Some(user) => limited(svc.reviews_for_user(user).await?, ctx, flags),
                None => {
                    let limit = effective_limit(flags.limit, ctx.config.general.default_limit);
                    svc.list_reviews(limit).await?
                }
            };
            output(&reviews, flags.format)
        }
        ReviewCommands::Update {
            id,
            name,
            title,
            description,
            objective,
            status,
            selection_strategy,
            quality_strategy,
            extraction_strategy,
            cutoff,
        } => {
            let mut builder = ReviewUpdateBuilder::new();
            if let Some(name) = name {
                builder = builder.name(name);
            }
            if let Some(title) = title {
                builder = builder.title(title);
            }
            if let Some(description) = description {
                builder = builder.description(description);
            }
            if let Some(objective) = objective {
                builder = builder.objective(objective);
            }
            if let Some(status) = parse_opt_enum::<ReviewStatus>(status.as_deref(), "status")? {
                builder = builder.status(status);
            }
            if let Some(strategy) =
                parse_opt_enum::<Strategy>(selection_strategy.as_deref(), "selection strategy")?
            {
                builder = builder.study_selection_strategy(strategy);
            }
            if let Some(strategy) =
                parse_opt_enum::<Strategy>(quality_strategy.as_deref(), "quality strategy")?
            {
                builder = builder.quality_assessment_strategy(strategy);
            }
            if let Some(strategy) =
                parse_opt_enum::<Strategy>(extraction_strategy.as_deref(), "extraction strategy")?
            {
                builder = builder.data_extraction_strategy(strategy);
            }
            if let Some(cutoff) = cutoff {
                builder = builder.quality_assessment_cutoff_score(*cutoff);
            }
            let review = svc.update_review(id, builder.build()).await?;
            tracing::info!(%id, "updated review");
            output(&review, flags.format)
        }
        ReviewCommands::Delete { id } => {
            svc.delete_review(id).await?;
            tracing::info!(%id, "deleted review");
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
        ReviewCommands::AddCoAuthor { id, user } => {
            svc.add_co_author(id, user).await?;
            output(&svc.co_authors_of(id).await?, flags.format)
        }
        ReviewCommands::RemoveCoAuthor { id, user } => {
            svc.remove_co_author(id, user).await?;
            output(&svc.co_authors_of(id).await?, flags.format)
        }
        ReviewCommands::CoAuthors { id } => {
            output(&limited(svc.co_authors_of(id).await?, ctx, flags), flags.format)
        }
        ReviewCommands::AddSource { id, source } => {
            svc.add_review_source(id, source).await?;
            output(&svc.sources_of(id).await?, flags.format)
        }
        ReviewCommands::RemoveSource { id, source } => {
            svc.remove_review_source(id, source).await?;
            output(&svc.sources_of(id).await?, flags.format)
        }
        ReviewCommands::Sources { id } => {
            output(&limited(svc.sources_of(id).await?, ctx, flags), flags.format)
        }
        ReviewCommands::Access { id, user } => {
            let allowed = svc.is_author_or_coauthor(id, user).await?;
            output(
                &serde_json::json!({ "review_id": id, "user_id": user, "allowed": allowed }),
                flags.format,
            )
        }
    }
}
