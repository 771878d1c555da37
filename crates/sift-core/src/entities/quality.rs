use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A quality-assessment question asked of every article in a review.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QualityQuestion {
    pub id: String,
    pub review_id: String,
    pub description: String,
}

impl fmt::Display for QualityQuestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

/// A weighted answer option. Listed heaviest first.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct QualityAnswer {
    pub id: String,
    pub review_id: String,
    pub description: String,
    pub weight: f64,
}

impl fmt::Display for QualityAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

/// One user's answer to one quality question for one article.
///
/// `answer_id` is `None` until the question is answered.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QualityAssessment {
    pub id: String,
    pub user_id: Option<String>,
    pub article_id: String,
    pub question_id: String,
    pub answer_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl fmt::Display for QualityAssessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.article_id, self.question_id)
    }
}
