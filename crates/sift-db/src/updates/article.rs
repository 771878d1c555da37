//! Article update builder.

use serde::Serialize;
use sift_core::enums::ArticleStatus;

#[derive(Debug, Clone, Default, Serialize)]
pub struct ArticleUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bibtex_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub journal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<String>,
    #[serde(rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_id: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_session_id: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ArticleStatus>,
}

pub struct ArticleUpdateBuilder(ArticleUpdate);

impl ArticleUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(ArticleUpdate::default())
    }

    #[must_use]
    pub fn bibtex_key(mut self, bibtex_key: impl Into<String>) -> Self {
        self.0.bibtex_key = Some(bibtex_key.into());
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.0.author = Some(author.into());
        self
    }

    #[must_use]
    pub fn journal(mut self, journal: impl Into<String>) -> Self {
        self.0.journal = Some(journal.into());
        self
    }

    #[must_use]
    pub fn year(mut self, year: impl Into<String>) -> Self {
        self.0.year = Some(year.into());
        self
    }

    #[must_use]
    pub fn volume(mut self, volume: impl Into<String>) -> Self {
        self.0.volume = Some(volume.into());
        self
    }

    #[must_use]
    pub fn pages(mut self, pages: impl Into<String>) -> Self {
        self.0.pages = Some(pages.into());
        self
    }

    #[must_use]
    pub fn abstract_text(mut self, abstract_text: impl Into<String>) -> Self {
        self.0.abstract_text = Some(abstract_text.into());
        self
    }

    #[must_use]
    pub fn document_type(mut self, document_type: impl Into<String>) -> Self {
        self.0.document_type = Some(document_type.into());
        self
    }

    #[must_use]
    pub fn author_keywords(mut self, author_keywords: impl Into<String>) -> Self {
        self.0.author_keywords = Some(author_keywords.into());
        self
    }

    #[must_use]
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.0.note = Some(note.into());
        self
    }

    #[must_use]
    pub fn source_id(mut self, source_id: Option<String>) -> Self {
        self.0.source_id = Some(source_id);
        self
    }

    #[must_use]
    pub fn search_session_id(mut self, search_session_id: Option<String>) -> Self {
        self.0.search_session_id = Some(search_session_id);
        self
    }

    #[must_use]
    pub const fn status(mut self, status: ArticleStatus) -> Self {
        self.0.status = Some(status);
        self
    }

    #[must_use]
    pub fn build(self) -> ArticleUpdate {
        self.0
    }
}
