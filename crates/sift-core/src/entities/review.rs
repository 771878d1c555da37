use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::{ReviewStatus, Strategy};

/// A systematic literature review: the root aggregate.
///
/// Questions, criteria, keywords, search sessions, articles, quality
/// questions/answers and extraction fields all hang off a review by
/// `review_id`. Co-authors and attached sources are many-to-many links.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Review {
    pub id: String,
    /// URL-safe slug.
    pub name: String,
    pub title: String,
    pub description: String,
    pub objective: String,
    pub author_id: String,
    pub status: ReviewStatus,
    pub study_selection_strategy: Strategy,
    pub quality_assessment_strategy: Strategy,
    pub data_extraction_strategy: Strategy,
    pub quality_assessment_cutoff_score: f64,
    pub created_at: DateTime<Utc>,
    /// Refreshed by the store on every save.
    pub last_update: DateTime<Utc>,
}

impl Review {
    /// True if `user_id` is the author or any of `co_author_ids`.
    ///
    /// Walks the whole co-author list; order carries no meaning.
    pub fn is_author_or_coauthor<'a, I>(&self, user_id: &str, co_author_ids: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        if self.author_id == user_id {
            return true;
        }
        co_author_ids.into_iter().any(|id| id == user_id)
    }
}

impl fmt::Display for Review {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review() -> Review {
        let now = Utc::now();
        Review {
            id: "rev-00000001".into(),
            name: "tdd-effects".into(),
            title: "Effects of TDD".into(),
            description: String::new(),
            objective: String::new(),
            author_id: "usr-00000001".into(),
            status: ReviewStatus::Unpublished,
            study_selection_strategy: Strategy::SingleForm,
            quality_assessment_strategy: Strategy::SingleForm,
            data_extraction_strategy: Strategy::SingleForm,
            quality_assessment_cutoff_score: 0.0,
            created_at: now,
            last_update: now,
        }
    }

    #[test]
    fn author_matches() {
        assert!(review().is_author_or_coauthor("usr-00000001", []));
    }

    #[test]
    fn co_author_matches_anywhere_in_list() {
        let co = ["usr-00000002", "usr-00000003", "usr-00000004"];
        assert!(review().is_author_or_coauthor("usr-00000004", co));
        assert!(review().is_author_or_coauthor("usr-00000002", co));
    }

    #[test]
    fn unrelated_user_does_not_match() {
        let co = ["usr-00000002"];
        assert!(!review().is_author_or_coauthor("usr-00000009", co));
    }

    #[test]
    fn display_is_slug() {
        assert_eq!(review().to_string(), "tdd-effects");
    }
}
