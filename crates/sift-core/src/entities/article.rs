use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::ArticleStatus;

/// A bibliographic record screened for a review.
///
/// Bibliographic fields are free text (BibTeX-style) and may be empty.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Article {
    pub id: String,
    pub review_id: String,
    pub bibtex_key: String,
    pub title: String,
    pub author: String,
    pub journal: String,
    pub year: String,
    pub volume: String,
    pub pages: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub document_type: String,
    pub author_keywords: String,
    pub note: String,
    pub source_id: Option<String>,
    pub search_session_id: Option<String>,
    pub status: ArticleStatus,
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}
