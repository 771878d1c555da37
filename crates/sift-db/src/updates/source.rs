//! Source update builder.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct SourceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Raw URL; normalized when written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
}

pub struct SourceUpdateBuilder(SourceUpdate);

impl SourceUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(SourceUpdate::default())
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.0.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.0.url = Some(url.into());
        self
    }

    #[must_use]
    pub const fn is_default(mut self, is_default: bool) -> Self {
        self.0.is_default = Some(is_default);
        self
    }

    #[must_use]
    pub fn build(self) -> SourceUpdate {
        self.0
    }
}
