//! Keyword update builder.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct KeywordUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synonym_of: Option<Option<String>>,
}

pub struct KeywordUpdateBuilder(KeywordUpdate);

impl KeywordUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(KeywordUpdate::default())
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.0.description = Some(description.into());
        self
    }

    /// `None` turns the keyword back into a root keyword.
    #[must_use]
    pub fn synonym_of(mut self, synonym_of: Option<String>) -> Self {
        self.0.synonym_of = Some(synonym_of);
        self
    }

    #[must_use]
    pub fn build(self) -> KeywordUpdate {
        self.0
    }
}
