//! Quality assessment repository: questions, weighted answers, per-article
//! assessments and the scores derived from them.

use sift_core::entities::{QualityAnswer, QualityAssessment, QualityQuestion};
use sift_core::ids::{PREFIX_QUALITY_ANSWER, PREFIX_QUALITY_ASSESSMENT, PREFIX_QUALITY_QUESTION};
use sift_core::scoring::{SUGGESTED_ANSWERS, max_score, meets_cutoff, total_score};

use crate::error::DatabaseError;
use crate::helpers::{
    SetClauses, format_datetime, get_opt_string, now, parse_datetime, require_affected,
};
use crate::service::ReviewService;

const QUESTION_COLS: &str = "id, review_id, description";
const ANSWER_COLS: &str = "id, review_id, description, weight";
const ASSESSMENT_COLS: &str = "id, user_id, article_id, question_id, answer_id, created_at";

fn row_to_question(row: &libsql::Row) -> Result<QualityQuestion, DatabaseError> {
    Ok(QualityQuestion {
        id: row.get(0)?,
        review_id: row.get(1)?,
        description: row.get(2)?,
    })
}

fn row_to_answer(row: &libsql::Row) -> Result<QualityAnswer, DatabaseError> {
    Ok(QualityAnswer {
        id: row.get(0)?,
        review_id: row.get(1)?,
        description: row.get(2)?,
        weight: row.get(3)?,
    })
}

fn row_to_assessment(row: &libsql::Row) -> Result<QualityAssessment, DatabaseError> {
    Ok(QualityAssessment {
        id: row.get(0)?,
        user_id: get_opt_string(row, 1)?,
        article_id: row.get(2)?,
        question_id: row.get(3)?,
        answer_id: get_opt_string(row, 4)?,
        created_at: parse_datetime(&row.get::<String>(5)?)?,
    })
}

impl ReviewService {
    // -- questions -----------------------------------------------------------

    pub async fn create_quality_question(
        &self,
        review_id: &str,
        description: &str,
    ) -> Result<QualityQuestion, DatabaseError> {
        let id = self.db().generate_id(PREFIX_QUALITY_QUESTION).await?;
        self.db()
            .conn()
            .execute(
                &format!("INSERT INTO quality_questions ({QUESTION_COLS}) VALUES (?1, ?2, ?3)"),
                [id.as_str(), review_id, description],
            )
            .await?;

        Ok(QualityQuestion {
            id,
            review_id: review_id.to_string(),
            description: description.to_string(),
        })
    }

    pub async fn get_quality_question(&self, id: &str) -> Result<QualityQuestion, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {QUESTION_COLS} FROM quality_questions WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_question(&row)
    }

    pub async fn update_quality_question(
        &self,
        question_id: &str,
        description: &str,
    ) -> Result<QualityQuestion, DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute(
                "UPDATE quality_questions SET description = ?1 WHERE id = ?2",
                [description, question_id],
            )
            .await?;
        require_affected(affected)?;
        self.get_quality_question(question_id).await
    }

    pub async fn delete_quality_question(&self, id: &str) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute("DELETE FROM quality_questions WHERE id = ?1", [id])
            .await?;
        require_affected(affected)
    }

    pub async fn quality_questions_of(
        &self,
        review_id: &str,
    ) -> Result<Vec<QualityQuestion>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {QUESTION_COLS} FROM quality_questions WHERE review_id = ?1 ORDER BY rowid"
                ),
                [review_id],
            )
            .await?;

        let mut questions = Vec::new();
        while let Some(row) = rows.next().await? {
            questions.push(row_to_question(&row)?);
        }
        Ok(questions)
    }

    // -- answers -------------------------------------------------------------

    pub async fn create_quality_answer(
        &self,
        review_id: &str,
        description: &str,
        weight: f64,
    ) -> Result<QualityAnswer, DatabaseError> {
        if !weight.is_finite() {
            return Err(DatabaseError::Validation(format!(
                "answer weight must be finite, got {weight}"
            )));
        }
        let id = self.db().generate_id(PREFIX_QUALITY_ANSWER).await?;
        self.db()
            .conn()
            .execute(
                &format!("INSERT INTO quality_answers ({ANSWER_COLS}) VALUES (?1, ?2, ?3, ?4)"),
                libsql::params![id.as_str(), review_id, description, weight],
            )
            .await?;

        Ok(QualityAnswer {
            id,
            review_id: review_id.to_string(),
            description: description.to_string(),
            weight,
        })
    }

    pub async fn get_quality_answer(&self, id: &str) -> Result<QualityAnswer, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {ANSWER_COLS} FROM quality_answers WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_answer(&row)
    }

    pub async fn update_quality_answer(
        &self,
        answer_id: &str,
        description: Option<&str>,
        weight: Option<f64>,
    ) -> Result<QualityAnswer, DatabaseError> {
        let mut sets = SetClauses::new();
        if let Some(description) = description {
            sets.push("description", description);
        }
        if let Some(weight) = weight {
            if !weight.is_finite() {
                return Err(DatabaseError::Validation(format!(
                    "answer weight must be finite, got {weight}"
                )));
            }
            sets.push("weight", weight);
        }

        if sets.is_empty() {
            return self.get_quality_answer(answer_id).await;
        }

        let (sql, params) = sets.into_update("quality_answers", answer_id);
        let affected = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        require_affected(affected)?;
        self.get_quality_answer(answer_id).await
    }

    /// Delete an answer. Assessments that chose it become unanswered.
    pub async fn delete_quality_answer(&self, id: &str) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute("DELETE FROM quality_answers WHERE id = ?1", [id])
            .await?;
        require_affected(affected)
    }

    /// Answer options of a review, heaviest first.
    pub async fn quality_answers_of(
        &self,
        review_id: &str,
    ) -> Result<Vec<QualityAnswer>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {ANSWER_COLS} FROM quality_answers
                     WHERE review_id = ?1
                     ORDER BY weight DESC, rowid"
                ),
                [review_id],
            )
            .await?;

        let mut answers = Vec::new();
        while let Some(row) = rows.next().await? {
            answers.push(row_to_answer(&row)?);
        }
        Ok(answers)
    }

    /// Add the suggested Yes / Partially / No answers to a review, skipping
    /// any description the review already has. Returns the review's answers.
    pub async fn seed_suggested_quality_answers(
        &self,
        review_id: &str,
    ) -> Result<Vec<QualityAnswer>, DatabaseError> {
        let existing = self.quality_answers_of(review_id).await?;
        for (description, weight) in SUGGESTED_ANSWERS {
            if existing.iter().any(|a| a.description == description) {
                continue;
            }
            self.create_quality_answer(review_id, description, weight)
                .await?;
        }
        self.quality_answers_of(review_id).await
    }

    // -- assessments ---------------------------------------------------------

    /// Record `user_id`'s answer to one quality question for one article.
    ///
    /// Replaces the answer if that user already assessed the pair. The
    /// question and answer must belong to the article's review.
    pub async fn assess_article(
        &self,
        user_id: &str,
        article_id: &str,
        question_id: &str,
        answer_id: Option<&str>,
    ) -> Result<QualityAssessment, DatabaseError> {
        let article = self.get_article(article_id).await?;
        let question = self.get_quality_question(question_id).await?;
        if question.review_id != article.review_id {
            return Err(DatabaseError::Validation(format!(
                "quality question {question_id} belongs to another review"
            )));
        }
        if let Some(answer_id) = answer_id {
            let answer = self.get_quality_answer(answer_id).await?;
            if answer.review_id != article.review_id {
                return Err(DatabaseError::Validation(format!(
                    "quality answer {answer_id} belongs to another review"
                )));
            }
        }

        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {ASSESSMENT_COLS} FROM quality_assessments
                     WHERE article_id = ?1 AND question_id = ?2 AND user_id = ?3
                     ORDER BY rowid LIMIT 1"
                ),
                [article_id, question_id, user_id],
            )
            .await?;

        if let Some(row) = rows.next().await? {
            let mut assessment = row_to_assessment(&row)?;
            self.db()
                .conn()
                .execute(
                    "UPDATE quality_assessments SET answer_id = ?1 WHERE id = ?2",
                    libsql::params![answer_id, assessment.id.as_str()],
                )
                .await?;
            assessment.answer_id = answer_id.map(String::from);
            return Ok(assessment);
        }

        let created_at = now();
        let id = self.db().generate_id(PREFIX_QUALITY_ASSESSMENT).await?;
        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO quality_assessments ({ASSESSMENT_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6)"
                ),
                libsql::params![
                    id.as_str(),
                    user_id,
                    article_id,
                    question_id,
                    answer_id,
                    format_datetime(&created_at)
                ],
            )
            .await?;

        Ok(QualityAssessment {
            id,
            user_id: Some(user_id.to_string()),
            article_id: article_id.to_string(),
            question_id: question_id.to_string(),
            answer_id: answer_id.map(String::from),
            created_at,
        })
    }

    pub async fn get_quality_assessment(
        &self,
        id: &str,
    ) -> Result<QualityAssessment, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {ASSESSMENT_COLS} FROM quality_assessments WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_assessment(&row)
    }

    pub async fn delete_quality_assessment(&self, id: &str) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute("DELETE FROM quality_assessments WHERE id = ?1", [id])
            .await?;
        require_affected(affected)
    }

    pub async fn quality_assessments_of(
        &self,
        article_id: &str,
    ) -> Result<Vec<QualityAssessment>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {ASSESSMENT_COLS} FROM quality_assessments
                     WHERE article_id = ?1
                     ORDER BY rowid"
                ),
                [article_id],
            )
            .await?;

        let mut assessments = Vec::new();
        while let Some(row) = rows.next().await? {
            assessments.push(row_to_assessment(&row)?);
        }
        Ok(assessments)
    }

    // -- scores --------------------------------------------------------------

    /// Sum of the answer weights over an article's assessments. Unanswered
    /// assessments add nothing.
    pub async fn quality_score_of(&self, article_id: &str) -> Result<f64, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT a.weight
                 FROM quality_assessments qa
                 LEFT JOIN quality_answers a ON a.id = qa.answer_id
                 WHERE qa.article_id = ?1",
                [article_id],
            )
            .await?;

        let mut weights = Vec::new();
        while let Some(row) = rows.next().await? {
            weights.push(row.get::<Option<f64>>(0)?);
        }
        Ok(total_score(weights))
    }

    /// Highest score an article can reach in the review: the number of
    /// quality questions times the heaviest answer weight.
    ///
    /// Never fails. A store error is logged and yields `0.0`.
    pub async fn max_quality_score_of(&self, review_id: &str) -> f64 {
        match self.try_max_quality_score(review_id).await {
            Ok(score) => score,
            Err(error) => {
                tracing::warn!(review_id, %error, "max quality score lookup failed");
                0.0
            }
        }
    }

    async fn try_max_quality_score(&self, review_id: &str) -> Result<f64, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT
                     (SELECT COUNT(*) FROM quality_questions WHERE review_id = ?1),
                     (SELECT MAX(weight) FROM quality_answers WHERE review_id = ?1)",
                [review_id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let question_count = u64::try_from(row.get::<i64>(0)?).unwrap_or(0);
        let highest_weight = row.get::<Option<f64>>(1)?;
        Ok(max_score(question_count, highest_weight))
    }

    /// Whether an article's score reaches its review's cutoff.
    pub async fn meets_quality_cutoff(&self, article_id: &str) -> Result<bool, DatabaseError> {
        let article = self.get_article(article_id).await?;
        let review = self.get_review(&article.review_id).await?;
        let score = self.quality_score_of(article_id).await?;
        Ok(meets_cutoff(score, review.quality_assessment_cutoff_score))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::error::DatabaseError;
    use crate::test_support::helpers::{test_article, test_review, test_service, test_user};
    use crate::updates::review::ReviewUpdateBuilder;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[tokio::test]
    async fn seeded_answers_listed_heaviest_first() {
        let svc = test_service().await;
        let (_, review) = test_review(&svc).await;

        let answers = svc.seed_suggested_quality_answers(&review.id).await.unwrap();
        let labels: Vec<&str> = answers.iter().map(|a| a.description.as_str()).collect();
        assert_eq!(labels, ["Yes", "Partially", "No"]);

        let again = svc.seed_suggested_quality_answers(&review.id).await.unwrap();
        assert_eq!(again.len(), 3);
    }

    #[tokio::test]
    async fn score_sums_answer_weights() {
        let svc = test_service().await;
        let (author, review) = test_review(&svc).await;
        let answers = svc.seed_suggested_quality_answers(&review.id).await.unwrap();
        let article = test_article(&svc, &review.id, "Scored").await;

        for answer in &answers {
            let question = svc
                .create_quality_question(&review.id, &format!("Q {}", answer.description))
                .await
                .unwrap();
            svc.assess_article(&author.id, &article.id, &question.id, Some(&answer.id))
                .await
                .unwrap();
        }

        assert!(approx(svc.quality_score_of(&article.id).await.unwrap(), 1.5));
    }

    #[tokio::test]
    async fn unassessed_article_scores_zero() {
        let svc = test_service().await;
        let (_, review) = test_review(&svc).await;
        let article = test_article(&svc, &review.id, "Untouched").await;
        assert!(approx(svc.quality_score_of(&article.id).await.unwrap(), 0.0));
    }

    #[tokio::test]
    async fn unanswered_assessment_adds_nothing() {
        let svc = test_service().await;
        let (author, review) = test_review(&svc).await;
        let answers = svc.seed_suggested_quality_answers(&review.id).await.unwrap();
        let article = test_article(&svc, &review.id, "Partial").await;
        let q1 = svc.create_quality_question(&review.id, "Q1").await.unwrap();
        let q2 = svc.create_quality_question(&review.id, "Q2").await.unwrap();

        svc.assess_article(&author.id, &article.id, &q1.id, Some(&answers[0].id))
            .await
            .unwrap();
        svc.assess_article(&author.id, &article.id, &q2.id, None)
            .await
            .unwrap();

        assert!(approx(svc.quality_score_of(&article.id).await.unwrap(), 1.0));
    }

    #[tokio::test]
    async fn deleted_answer_leaves_assessment_unanswered() {
        let svc = test_service().await;
        let (author, review) = test_review(&svc).await;
        let yes = svc.create_quality_answer(&review.id, "Yes", 1.0).await.unwrap();
        let question = svc.create_quality_question(&review.id, "Q1").await.unwrap();
        let article = test_article(&svc, &review.id, "A").await;
        let assessment = svc
            .assess_article(&author.id, &article.id, &question.id, Some(&yes.id))
            .await
            .unwrap();

        svc.delete_quality_answer(&yes.id).await.unwrap();
        let stored = svc.get_quality_assessment(&assessment.id).await.unwrap();
        assert_eq!(stored.answer_id, None);
        assert!(approx(svc.quality_score_of(&article.id).await.unwrap(), 0.0));
    }

    #[tokio::test]
    async fn reassessing_replaces_answer() {
        let svc = test_service().await;
        let (author, review) = test_review(&svc).await;
        let answers = svc.seed_suggested_quality_answers(&review.id).await.unwrap();
        let question = svc.create_quality_question(&review.id, "Q1").await.unwrap();
        let article = test_article(&svc, &review.id, "A").await;

        let first = svc
            .assess_article(&author.id, &article.id, &question.id, Some(&answers[2].id))
            .await
            .unwrap();
        let second = svc
            .assess_article(&author.id, &article.id, &question.id, Some(&answers[0].id))
            .await
            .unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(svc.quality_assessments_of(&article.id).await.unwrap().len(), 1);
        assert!(approx(svc.quality_score_of(&article.id).await.unwrap(), 1.0));

        let other = test_user(&svc, "bea").await;
        svc.assess_article(&other.id, &article.id, &question.id, Some(&answers[1].id))
            .await
            .unwrap();
        assert_eq!(svc.quality_assessments_of(&article.id).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn assessment_question_must_share_review() {
        let svc = test_service().await;
        let (author, review) = test_review(&svc).await;
        let other = svc
            .create_review(&author.id, "other", "Other", "", "")
            .await
            .unwrap();
        let foreign = svc.create_quality_question(&other.id, "Q").await.unwrap();
        let article = test_article(&svc, &review.id, "A").await;

        let err = svc
            .assess_article(&author.id, &article.id, &foreign.id, None)
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::Validation(_)));
    }

    #[tokio::test]
    async fn max_score_is_questions_times_heaviest_answer() {
        let svc = test_service().await;
        let (_, review) = test_review(&svc).await;
        for i in 0..3 {
            svc.create_quality_question(&review.id, &format!("Q{i}"))
                .await
                .unwrap();
        }
        svc.seed_suggested_quality_answers(&review.id).await.unwrap();

        assert!(approx(svc.max_quality_score_of(&review.id).await, 3.0));
    }

    #[tokio::test]
    async fn max_score_zero_without_questions_or_answers() {
        let svc = test_service().await;
        let (author, review) = test_review(&svc).await;
        svc.seed_suggested_quality_answers(&review.id).await.unwrap();
        assert!(approx(svc.max_quality_score_of(&review.id).await, 0.0));

        let other = svc
            .create_review(&author.id, "other", "Other", "", "")
            .await
            .unwrap();
        svc.create_quality_question(&other.id, "Q1").await.unwrap();
        assert!(approx(svc.max_quality_score_of(&other.id).await, 0.0));
    }

    #[tokio::test]
    async fn max_score_for_unknown_review_is_zero() {
        let svc = test_service().await;
        assert!(approx(svc.max_quality_score_of("rev-00000000").await, 0.0));
    }

    #[tokio::test]
    async fn cutoff_compares_score_with_review_threshold() {
        let svc = test_service().await;
        let (author, review) = test_review(&svc).await;
        let answers = svc.seed_suggested_quality_answers(&review.id).await.unwrap();
        let question = svc.create_quality_question(&review.id, "Q1").await.unwrap();
        let article = test_article(&svc, &review.id, "A").await;
        svc.assess_article(&author.id, &article.id, &question.id, Some(&answers[1].id))
            .await
            .unwrap();

        assert!(svc.meets_quality_cutoff(&article.id).await.unwrap());

        svc.update_review(
            &review.id,
            ReviewUpdateBuilder::new()
                .quality_assessment_cutoff_score(1.0)
                .build(),
        )
        .await
        .unwrap();
        assert!(!svc.meets_quality_cutoff(&article.id).await.unwrap());
    }

    #[tokio::test]
    async fn non_finite_weight_rejected() {
        let svc = test_service().await;
        let (_, review) = test_review(&svc).await;
        let err = svc
            .create_quality_answer(&review.id, "Bad", f64::NAN)
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::Validation(_)));
    }

    #[tokio::test]
    async fn question_and_answer_crud() {
        let svc = test_service().await;
        let (_, review) = test_review(&svc).await;
        let question = svc.create_quality_question(&review.id, "Q1").await.unwrap();
        let renamed = svc
            .update_quality_question(&question.id, "Is the design sound?")
            .await
            .unwrap();
        assert_eq!(renamed.description, "Is the design sound?");

        let answer = svc.create_quality_answer(&review.id, "Maybe", 0.25).await.unwrap();
        let reweighted = svc
            .update_quality_answer(&answer.id, None, Some(0.75))
            .await
            .unwrap();
        assert_eq!(reweighted.description, "Maybe");
        assert!(approx(reweighted.weight, 0.75));

        svc.delete_quality_question(&question.id).await.unwrap();
        assert!(svc.quality_questions_of(&review.id).await.unwrap().is_empty());
    }
}
