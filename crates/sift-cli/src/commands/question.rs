use sift_core::entities::Pico;
use sift_core::enums::QuestionType;
use sift_db::updates::question::QuestionUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::QuestionCommands;
use crate::commands::shared::limit::limited;
use crate::commands::shared::parse::{parse_enum, parse_opt_enum};
use crate::context::AppContext;
use crate::output::output;

/// Handle `sift question`.
pub async fn handle(
    action: &QuestionCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let svc = &ctx.service;
    match action {
        QuestionCommands::Create {
            review,
            text,
            question_type,
            population,
            intervention,
            comparison,
            outcome,
        } => {
            let question_type: QuestionType = parse_enum(question_type, "question type")?;
            let pico = Pico {
                population: population.clone(),
                intervention: intervention.clone(),
                comparison: comparison.clone(),
                outcome: outcome.clone(),
            };
            let question = svc
                .create_question(review, question_type, text, &pico)
                .await?;
            tracing::info!(id = %question.id, "created question");
            output(&question, flags.format)
        }
        QuestionCommands::Get { id } => output(&svc.get_question(id).await?, flags.format),
        QuestionCommands::Update {
            id,
            text,
            question_type,
            population,
            intervention,
            comparison,
            outcome,
        } => {
            let mut builder = QuestionUpdateBuilder::new();
            if let Some(text) = text {
                builder = builder.question(text);
            }
            if let Some(question_type) =
                parse_opt_enum::<QuestionType>(question_type.as_deref(), "question type")?
            {
                builder = builder.question_type(question_type);
            }
            if let Some(population) = population {
                builder = builder.population(population);
            }
            if let Some(intervention) = intervention {
                builder = builder.intervention(intervention);
            }
            if let Some(comparison) = comparison {
                builder = builder.comparison(comparison);
            }
            if let Some(outcome) = outcome {
                builder = builder.outcome(outcome);
            }
            output(&svc.update_question(id, builder.build()).await?, flags.format)
        }
        QuestionCommands::Delete { id } => {
            svc.delete_question(id).await?;
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
        QuestionCommands::List { review, secondary } => {
            let questions = if *secondary {
                svc.secondary_questions_of(review).await?
            } else {
                svc.questions_of(review).await?
            };
            output(&limited(questions, ctx, flags), flags.format)
        }
        QuestionCommands::Main { review } => {
            output(&svc.main_question_of(review).await?, flags.format)
        }
    }
}
