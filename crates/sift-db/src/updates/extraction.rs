//! Data extraction field update builder.

use serde::Serialize;
use sift_core::enums::FieldType;

#[derive(Debug, Clone, Default, Serialize)]
pub struct ExtractionFieldUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_type: Option<FieldType>,
}

pub struct ExtractionFieldUpdateBuilder(ExtractionFieldUpdate);

impl ExtractionFieldUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(ExtractionFieldUpdate::default())
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.0.description = Some(description.into());
        self
    }

    #[must_use]
    pub const fn field_type(mut self, field_type: FieldType) -> Self {
        self.0.field_type = Some(field_type);
        self
    }

    #[must_use]
    pub fn build(self) -> ExtractionFieldUpdate {
        self.0
    }
}
