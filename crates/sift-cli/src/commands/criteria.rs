use sift_core::enums::CriteriaType;
use sift_db::updates::criteria::CriteriaUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CriteriaCommands;
use crate::commands::shared::limit::limited;
use crate::commands::shared::parse::{parse_enum, parse_opt_enum};
use crate::context::AppContext;
use crate::output::output;

/// Handle `sift criteria`.
pub async fn handle(
    action: &CriteriaCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let svc = &ctx.service;
    match action {
        CriteriaCommands::Create {
            review,
            criteria_type,
            description,
        } => {
            let criteria_type: CriteriaType = parse_enum(criteria_type, "criteria type")?;
            let criteria = svc
                .create_criteria(review, criteria_type, description)
                .await?;
            tracing::info!(id = %criteria.id, "created criteria");
            output(&criteria, flags.format)
        }
        CriteriaCommands::Get { id } => output(&svc.get_criteria(id).await?, flags.format),
        CriteriaCommands::Update {
            id,
            criteria_type,
            description,
        } => {
            let mut builder = CriteriaUpdateBuilder::new();
            if let Some(criteria_type) =
                parse_opt_enum::<CriteriaType>(criteria_type.as_deref(), "criteria type")?
            {
                builder = builder.criteria_type(criteria_type);
            }
            if let Some(description) = description {
                builder = builder.description(description);
            }
            output(&svc.update_criteria(id, builder.build()).await?, flags.format)
        }
        CriteriaCommands::Delete { id } => {
            svc.delete_criteria(id).await?;
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
        CriteriaCommands::List { review } => {
            let inclusion = limited(svc.inclusion_criteria_of(review).await?, ctx, flags);
            let exclusion = limited(svc.exclusion_criteria_of(review).await?, ctx, flags);
            output(
                &serde_json::json!({ "inclusion": inclusion, "exclusion": exclusion }),
                flags.format,
            )
        }
    }
}
