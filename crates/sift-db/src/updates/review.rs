//! Review update builder.
//!
//! `last_update` is not settable: every save stamps it.

use serde::Serialize;
use sift_core::enums::{ReviewStatus, Strategy};

#[derive(Debug, Clone, Default, Serialize)]
pub struct ReviewUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objective: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ReviewStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub study_selection_strategy: Option<Strategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality_assessment_strategy: Option<Strategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_extraction_strategy: Option<Strategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality_assessment_cutoff_score: Option<f64>,
}

pub struct ReviewUpdateBuilder(ReviewUpdate);

impl ReviewUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(ReviewUpdate::default())
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.0.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.0.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn objective(mut self, objective: impl Into<String>) -> Self {
        self.0.objective = Some(objective.into());
        self
    }

    #[must_use]
    pub const fn status(mut self, status: ReviewStatus) -> Self {
        self.0.status = Some(status);
        self
    }

    #[must_use]
    pub const fn study_selection_strategy(mut self, strategy: Strategy) -> Self {
        self.0.study_selection_strategy = Some(strategy);
        self
    }

    #[must_use]
    pub const fn quality_assessment_strategy(mut self, strategy: Strategy) -> Self {
        self.0.quality_assessment_strategy = Some(strategy);
        self
    }

    #[must_use]
    pub const fn data_extraction_strategy(mut self, strategy: Strategy) -> Self {
        self.0.data_extraction_strategy = Some(strategy);
        self
    }

    #[must_use]
    pub const fn quality_assessment_cutoff_score(mut self, score: f64) -> Self {
        self.0.quality_assessment_cutoff_score = Some(score);
        self
    }

    #[must_use]
    pub fn build(self) -> ReviewUpdate {
        self.0
    }
}
