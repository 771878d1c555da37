use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::CriteriaType;

/// An inclusion or exclusion rule applied while screening articles.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SelectionCriteria {
    pub id: String,
    pub review_id: String,
    pub criteria_type: CriteriaType,
    /// At most 200 characters once stored.
    pub description: String,
}

impl fmt::Display for SelectionCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}
