//! Research question repository.

use sift_core::entities::{Pico, Question};
use sift_core::enums::QuestionType;
use sift_core::ids::PREFIX_QUESTION;

use crate::error::DatabaseError;
use crate::helpers::{SetClauses, require_affected};
use crate::service::ReviewService;
use crate::updates::question::QuestionUpdate;

const SELECT_COLS: &str =
    "id, review_id, question, population, intervention, comparison, outcome, question_type";

fn row_to_question(row: &libsql::Row) -> Result<Question, DatabaseError> {
    Ok(Question {
        id: row.get(0)?,
        review_id: row.get(1)?,
        question: row.get(2)?,
        pico: Pico {
            population: row.get(3)?,
            intervention: row.get(4)?,
            comparison: row.get(5)?,
            outcome: row.get(6)?,
        },
        question_type: QuestionType::from_code(&row.get::<String>(7)?)?,
    })
}

impl ReviewService {
    pub async fn create_question(
        &self,
        review_id: &str,
        question_type: QuestionType,
        question: &str,
        pico: &Pico,
    ) -> Result<Question, DatabaseError> {
        let id = self.db().generate_id(PREFIX_QUESTION).await?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO questions ({SELECT_COLS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)"
                ),
                libsql::params![
                    id.as_str(),
                    review_id,
                    question,
                    pico.population.as_str(),
                    pico.intervention.as_str(),
                    pico.comparison.as_str(),
                    pico.outcome.as_str(),
                    question_type.code()
                ],
            )
            .await?;

        Ok(Question {
            id,
            review_id: review_id.to_string(),
            question: question.to_string(),
            pico: pico.clone(),
            question_type,
        })
    }

    pub async fn get_question(&self, id: &str) -> Result<Question, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM questions WHERE id = ?1"), [id])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_question(&row)
    }

    pub async fn update_question(
        &self,
        question_id: &str,
        update: QuestionUpdate,
    ) -> Result<Question, DatabaseError> {
        let mut sets = SetClauses::new();
        if let Some(question) = update.question {
            sets.push("question", question);
        }
        if let Some(population) = update.population {
            sets.push("population", population);
        }
        if let Some(intervention) = update.intervention {
            sets.push("intervention", intervention);
        }
        if let Some(comparison) = update.comparison {
            sets.push("comparison", comparison);
        }
        if let Some(outcome) = update.outcome {
            sets.push("outcome", outcome);
        }
        if let Some(question_type) = update.question_type {
            sets.push("question_type", question_type.code());
        }

        if sets.is_empty() {
            return self.get_question(question_id).await;
        }

        let (sql, params) = sets.into_update("questions", question_id);
        let affected = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        require_affected(affected)?;
        self.get_question(question_id).await
    }

    pub async fn delete_question(&self, id: &str) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute("DELETE FROM questions WHERE id = ?1", [id])
            .await?;
        require_affected(affected)
    }

    pub async fn questions_of(&self, review_id: &str) -> Result<Vec<Question>, DatabaseError> {
        self.query_questions(
            &format!("SELECT {SELECT_COLS} FROM questions WHERE review_id = ?1 ORDER BY rowid"),
            libsql::params![review_id],
        )
        .await
    }

    /// The review's main question, if it has one.
    ///
    /// When several are stored, the first one written wins.
    pub async fn main_question_of(
        &self,
        review_id: &str,
    ) -> Result<Option<Question>, DatabaseError> {
        let mut questions = self
            .query_questions(
                &format!(
                    "SELECT {SELECT_COLS} FROM questions
                     WHERE review_id = ?1 AND question_type = ?2
                     ORDER BY rowid LIMIT 1"
                ),
                libsql::params![review_id, QuestionType::Main.code()],
            )
            .await?;
        Ok(questions.pop())
    }

    pub async fn secondary_questions_of(
        &self,
        review_id: &str,
    ) -> Result<Vec<Question>, DatabaseError> {
        self.query_questions(
            &format!(
                "SELECT {SELECT_COLS} FROM questions
                 WHERE review_id = ?1 AND question_type = ?2
                 ORDER BY rowid"
            ),
            libsql::params![review_id, QuestionType::Secondary.code()],
        )
        .await
    }

    async fn query_questions(
        &self,
        sql: &str,
        params: impl libsql::params::IntoParams,
    ) -> Result<Vec<Question>, DatabaseError> {
        let mut rows = self.db().conn().query(sql, params).await?;
        let mut questions = Vec::new();
        while let Some(row) = rows.next().await? {
            questions.push(row_to_question(&row)?);
        }
        Ok(questions)
    }
}
