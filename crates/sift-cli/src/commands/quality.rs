use crate::cli::GlobalFlags;
use crate::cli::subcommands::QualityCommands;
use crate::commands::shared::limit::limited;
use crate::context::AppContext;
use crate::output::output;

/// Handle `sift quality`.
pub async fn handle(
    action: &QualityCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let svc = &ctx.service;
    match action {
        QualityCommands::AddQuestion {
            review,
            description,
        } => {
            let question = svc.create_quality_question(review, description).await?;
            tracing::info!(id = %question.id, "created quality question");
            output(&question, flags.format)
        }
        QualityCommands::UpdateQuestion { id, description } => {
            output(&svc.update_quality_question(id, description).await?, flags.format)
        }
        QualityCommands::RemoveQuestion { id } => {
            svc.delete_quality_question(id).await?;
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
        QualityCommands::Questions { review } => {
            output(&limited(svc.quality_questions_of(review).await?, ctx, flags), flags.format)
        }
        QualityCommands::AddAnswer {
            review,
            description,
            weight,
        } => {
            let answer = svc
                .create_quality_answer(review, description, *weight)
                .await?;
            tracing::info!(id = %answer.id, weight, "created quality answer");
            output(&answer, flags.format)
        }
        QualityCommands::UpdateAnswer {
            id,
            description,
            weight,
        } => {
            let answer = svc
                .update_quality_answer(id, description.as_deref(), *weight)
                .await?;
            output(&answer, flags.format)
        }
        QualityCommands::RemoveAnswer { id } => {
            svc.delete_quality_answer(id).await?;
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
        QualityCommands::Answers { review } => {
            output(&limited(svc.quality_answers_of(review).await?, ctx, flags), flags.format)
        }
        QualityCommands::Seed { review } => {
            let answers = svc.seed_suggested_quality_answers(review).await?;
            tracing::info!(review = %review, count = answers.len(), "seeded quality answers");
            output(&answers, flags.format)
        }
        QualityCommands::Assess {
            article,
            question,
            user,
            answer,
        } => {
            let assessment = svc
                .assess_article(user, article, question, answer.as_deref())
                .await?;
            tracing::info!(id = %assessment.id, article = %article, "recorded assessment");
            output(&assessment, flags.format)
        }
        QualityCommands::Assessments { article } => {
            output(&limited(svc.quality_assessments_of(article).await?, ctx, flags), flags.format)
        }
        QualityCommands::RemoveAssessment { id } => {
            svc.delete_quality_assessment(id).await?;
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
        QualityCommands::Score { article } => {
            let review_id = svc.get_article(article).await?.review_id;
            let score = svc.quality_score_of(article).await?;
            let max_score = svc.max_quality_score_of(&review_id).await;
            let meets_cutoff = svc.meets_quality_cutoff(article).await?;
            output(
                &serde_json::json!({
                    "article_id": article,
                    "score": score,
                    "max_score": max_score,
                    "meets_cutoff": meets_cutoff,
                }),
                flags.format,
            )
        }
        QualityCommands::MaxScore { review } => {
            let max_score = svc.max_quality_score_of(review).await;
            output(
                &serde_json::json!({ "review_id": review, "max_score": max_score }),
                flags.format,
            )
        }
    }
}
