use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::FieldType;

/// A structured value the reviewers capture from each accepted article.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DataExtractionField {
    pub id: String,
    pub review_id: String,
    pub description: String,
    pub field_type: FieldType,
}

impl DataExtractionField {
    /// True for select-one and select-many fields, whose values come from
    /// lookup rows.
    #[must_use]
    pub const fn is_select_field(&self) -> bool {
        self.field_type.is_select()
    }
}

impl fmt::Display for DataExtractionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

/// A permitted value of a select field.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DataExtractionLookup {
    pub id: String,
    pub field_id: String,
    pub value: String,
}

impl fmt::Display for DataExtractionLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// A captured value for one field of one article.
///
/// Free-text fields use `value`; select fields use `select_values` (lookup IDs).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DataExtraction {
    pub id: String,
    pub user_id: Option<String>,
    pub article_id: String,
    pub field_id: String,
    pub value: String,
    pub select_values: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(field_type: FieldType) -> DataExtractionField {
        DataExtractionField {
            id: "def-00000001".into(),
            review_id: "rev-00000001".into(),
            description: "Study design".into(),
            field_type,
        }
    }

    #[test]
    fn select_field_predicate() {
        assert!(field(FieldType::SelectOne).is_select_field());
        assert!(field(FieldType::SelectMany).is_select_field());
        assert!(!field(FieldType::String).is_select_field());
        assert!(!field(FieldType::Date).is_select_field());
    }
}
