use sift_core::enums::FieldType;
use sift_db::updates::extraction::ExtractionFieldUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ExtractionCommands;
use crate::commands::shared::limit::limited;
use crate::commands::shared::parse::{parse_enum, parse_opt_enum};
use crate::context::AppContext;
use crate::output::output;

/// Handle `sift extraction`.
pub async fn handle(
    action: &ExtractionCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let svc = &ctx.service;
    match action {
        ExtractionCommands::AddField {
            review,
            description,
            field_type,
        } => {
            let field_type: FieldType = parse_enum(field_type, "field type")?;
            let field = svc
                .create_extraction_field(review, description, field_type)
                .await?;
            tracing::info!(id = %field.id, field_type = field_type.code(), "created extraction field");
            output(&field, flags.format)
        }
        ExtractionCommands::UpdateField {
            id,
            description,
            field_type,
        } => {
            let mut builder = ExtractionFieldUpdateBuilder::new();
            if let Some(description) = description {
                builder = builder.description(description);
            }
            if let Some(field_type) =
                parse_opt_enum::<FieldType>(field_type.as_deref(), "field type")?
            {
                builder = builder.field_type(field_type);
            }
            output(
                &svc.update_extraction_field(id, builder.build()).await?,
                flags.format,
            )
        }
        ExtractionCommands::RemoveField { id } => {
            svc.delete_extraction_field(id).await?;
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
        ExtractionCommands::Fields { review } => {
            output(&limited(svc.data_extraction_fields_of(review).await?, ctx, flags), flags.format)
        }
        ExtractionCommands::AddValue { field, value } => {
            output(&svc.create_extraction_lookup(field, value).await?, flags.format)
        }
        ExtractionCommands::UpdateValue { id, value } => {
            output(&svc.update_extraction_lookup(id, value).await?, flags.format)
        }
        ExtractionCommands::RemoveValue { id } => {
            svc.delete_extraction_lookup(id).await?;
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
        ExtractionCommands::Values { field } => {
            output(&limited(svc.select_values_of(field).await?, ctx, flags), flags.format)
        }
        ExtractionCommands::Record {
            article,
            field,
            user,
            value,
            selections,
        } => {
            let lookups: Vec<&str> = selections.iter().map(String::as_str).collect();
            let extraction = svc
                .record_data_extraction(user, article, field, value, &lookups)
                .await?;
            tracing::info!(id = %extraction.id, article = %article, "recorded extraction");
            output(&extraction, flags.format)
        }
        ExtractionCommands::SetValue { id, value } => {
            output(&svc.update_data_extraction_value(id, value).await?, flags.format)
        }
        ExtractionCommands::Select { id, lookups } => {
            let lookups: Vec<&str> = lookups.iter().map(String::as_str).collect();
            output(
                &svc.set_extraction_select_values(id, &lookups).await?,
                flags.format,
            )
        }
        ExtractionCommands::Show { article } => {
            output(&limited(svc.data_extractions_of(article).await?, ctx, flags), flags.format)
        }
        ExtractionCommands::Delete { id } => {
            svc.delete_data_extraction(id).await?;
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
    }
}
