//! Selection criteria update builder.

use serde::Serialize;
use sift_core::enums::CriteriaType;

#[derive(Debug, Clone, Default, Serialize)]
pub struct CriteriaUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub criteria_type: Option<CriteriaType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

pub struct CriteriaUpdateBuilder(CriteriaUpdate);

impl CriteriaUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(CriteriaUpdate::default())
    }

    #[must_use]
    pub const fn criteria_type(mut self, criteria_type: CriteriaType) -> Self {
        self.0.criteria_type = Some(criteria_type);
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.0.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn build(self) -> CriteriaUpdate {
        self.0
    }
}
