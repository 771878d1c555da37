use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::QuestionType;

/// Population / Intervention / Comparison / Outcome breakdown of a question.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Pico {
    pub population: String,
    pub intervention: String,
    pub comparison: String,
    pub outcome: String,
}

/// A research question of a review.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Question {
    pub id: String,
    pub review_id: String,
    pub question: String,
    #[serde(flatten)]
    pub pico: Pico,
    pub question_type: QuestionType,
}

impl Question {
    #[must_use]
    pub fn is_main(&self) -> bool {
        self.question_type == QuestionType::Main
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.question)
    }
}
