//! Question update builder.

use serde::Serialize;
use sift_core::enums::QuestionType;

#[derive(Debug, Clone, Default, Serialize)]
pub struct QuestionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub population: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intervention: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_type: Option<QuestionType>,
}

pub struct QuestionUpdateBuilder(QuestionUpdate);

impl QuestionUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(QuestionUpdate::default())
    }

    #[must_use]
    pub fn question(mut self, question: impl Into<String>) -> Self {
        self.0.question = Some(question.into());
        self
    }

    #[must_use]
    pub fn population(mut self, population: impl Into<String>) -> Self {
        self.0.population = Some(population.into());
        self
    }

    #[must_use]
    pub fn intervention(mut self, intervention: impl Into<String>) -> Self {
        self.0.intervention = Some(intervention.into());
        self
    }

    #[must_use]
    pub fn comparison(mut self, comparison: impl Into<String>) -> Self {
        self.0.comparison = Some(comparison.into());
        self
    }

    #[must_use]
    pub fn outcome(mut self, outcome: impl Into<String>) -> Self {
        self.0.outcome = Some(outcome.into());
        self
    }

    #[must_use]
    pub const fn question_type(mut self, question_type: QuestionType) -> Self {
        self.0.question_type = Some(question_type);
        self
    }

    #[must_use]
    pub fn build(self) -> QuestionUpdate {
        self.0
    }
}
