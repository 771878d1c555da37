use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A recorded search string, optionally tied to one source.
///
/// A session with no source is the review's generic search session; by
/// convention a review has at most one.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SearchSession {
    pub id: String,
    pub review_id: String,
    pub source_id: Option<String>,
    pub search_string: String,
}

impl SearchSession {
    #[must_use]
    pub const fn is_generic(&self) -> bool {
        self.source_id.is_none()
    }
}

/// Result of looking up a review's generic search session.
///
/// `Draft` means none is stored yet. It has no ID and is never written unless
/// explicitly saved.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum GenericSearchSession {
    Saved(SearchSession),
    Draft { review_id: String, search_string: String },
}

impl GenericSearchSession {
    #[must_use]
    pub fn draft(review_id: impl Into<String>) -> Self {
        Self::Draft {
            review_id: review_id.into(),
            search_string: String::new(),
        }
    }

    #[must_use]
    pub fn review_id(&self) -> &str {
        match self {
            Self::Saved(session) => &session.review_id,
            Self::Draft { review_id, .. } => review_id,
        }
    }

    #[must_use]
    pub fn search_string(&self) -> &str {
        match self {
            Self::Saved(session) => &session.search_string,
            Self::Draft { search_string, .. } => search_string,
        }
    }

    #[must_use]
    pub const fn is_saved(&self) -> bool {
        matches!(self, Self::Saved(_))
    }

    #[must_use]
    pub fn into_saved(self) -> Option<SearchSession> {
        match self {
            Self::Saved(session) => Some(session),
            Self::Draft { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_is_bound_to_review_and_empty() {
        let draft = GenericSearchSession::draft("rev-00000001");
        assert!(!draft.is_saved());
        assert_eq!(draft.review_id(), "rev-00000001");
        assert_eq!(draft.search_string(), "");
        assert!(draft.into_saved().is_none());
    }

    #[test]
    fn saved_exposes_session() {
        let session = SearchSession {
            id: "ses-00000001".into(),
            review_id: "rev-00000001".into(),
            source_id: None,
            search_string: "tdd AND quality".into(),
        };
        let generic = GenericSearchSession::Saved(session.clone());
        assert!(generic.is_saved());
        assert_eq!(generic.search_string(), "tdd AND quality");
        assert_eq!(generic.into_saved(), Some(session));
    }
}
