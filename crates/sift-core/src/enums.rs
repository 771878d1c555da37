//! Label enums and entity types for Sift.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! Label enums also carry the single-character code used in SQL storage
//! (`code()` / `from_code()`), which keeps the stored layout compatible with
//! existing review databases.
//!
//! None of these labels has transition rules: any value may follow any other.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::CoreError;

fn invalid_code(kind: &str, code: &str) -> CoreError {
    CoreError::InvalidCode {
        kind: kind.to_string(),
        code: code.to_string(),
    }
}

// ---------------------------------------------------------------------------
// ReviewStatus
// ---------------------------------------------------------------------------

/// Publication state of a review.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    #[default]
    Unpublished,
    Published,
}

impl ReviewStatus {
    /// Single-character storage code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Unpublished => "U",
            Self::Published => "P",
        }
    }

    /// Parse a storage code.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidCode` for anything other than `U` or `P`.
    pub fn from_code(code: &str) -> Result<Self, CoreError> {
        match code {
            "U" => Ok(Self::Unpublished),
            "P" => Ok(Self::Published),
            other => Err(invalid_code("review status", other)),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unpublished => "unpublished",
            Self::Published => "published",
        }
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Strategy
// ---------------------------------------------------------------------------

/// How a conducting phase (study selection, quality assessment, data
/// extraction) is carried out.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    #[default]
    SingleForm,
    MultipleForms,
}

impl Strategy {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::SingleForm => "S",
            Self::MultipleForms => "M",
        }
    }

    /// # Errors
    ///
    /// Returns `CoreError::InvalidCode` for anything other than `S` or `M`.
    pub fn from_code(code: &str) -> Result<Self, CoreError> {
        match code {
            "S" => Ok(Self::SingleForm),
            "M" => Ok(Self::MultipleForms),
            other => Err(invalid_code("strategy", other)),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SingleForm => "single_form",
            Self::MultipleForms => "multiple_forms",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// QuestionType
// ---------------------------------------------------------------------------

/// Role of a research question within its review.
///
/// A review is meant to have at most one `Main` question; the store does not
/// enforce it and `main_question_of` picks the first one it finds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    Main,
    Secondary,
}

impl QuestionType {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Main => "M",
            Self::Secondary => "S",
        }
    }

    /// # Errors
    ///
    /// Returns `CoreError::InvalidCode` for anything other than `M` or `S`.
    pub fn from_code(code: &str) -> Result<Self, CoreError> {
        match code {
            "M" => Ok(Self::Main),
            "S" => Ok(Self::Secondary),
            other => Err(invalid_code("question type", other)),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Secondary => "secondary",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CriteriaType
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CriteriaType {
    Inclusion,
    Exclusion,
}

impl CriteriaType {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Inclusion => "I",
            Self::Exclusion => "E",
        }
    }

    /// # Errors
    ///
    /// Returns `CoreError::InvalidCode` for anything other than `I` or `E`.
    pub fn from_code(code: &str) -> Result<Self, CoreError> {
        match code {
            "I" => Ok(Self::Inclusion),
            "E" => Ok(Self::Exclusion),
            other => Err(invalid_code("criteria type", other)),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inclusion => "inclusion",
            Self::Exclusion => "exclusion",
        }
    }
}

impl fmt::Display for CriteriaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ArticleStatus
// ---------------------------------------------------------------------------

/// Screening label of an article.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ArticleStatus {
    #[default]
    Unclassified,
    Rejected,
    Accepted,
}

impl ArticleStatus {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Unclassified => "U",
            Self::Rejected => "R",
            Self::Accepted => "A",
        }
    }

    /// # Errors
    ///
    /// Returns `CoreError::InvalidCode` for anything other than `U`, `R` or `A`.
    pub fn from_code(code: &str) -> Result<Self, CoreError> {
        match code {
            "U" => Ok(Self::Unclassified),
            "R" => Ok(Self::Rejected),
            "A" => Ok(Self::Accepted),
            other => Err(invalid_code("article status", other)),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unclassified => "unclassified",
            Self::Rejected => "rejected",
            Self::Accepted => "accepted",
        }
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// FieldType
// ---------------------------------------------------------------------------

/// Value type of a data extraction field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Boolean,
    String,
    Float,
    Integer,
    Date,
    SelectOne,
    SelectMany,
}

impl FieldType {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Boolean => "B",
            Self::String => "S",
            Self::Float => "F",
            Self::Integer => "I",
            Self::Date => "D",
            Self::SelectOne => "O",
            Self::SelectMany => "M",
        }
    }

    /// # Errors
    ///
    /// Returns `CoreError::InvalidCode` for codes outside `B S F I D O M`.
    pub fn from_code(code: &str) -> Result<Self, CoreError> {
        match code {
            "B" => Ok(Self::Boolean),
            "S" => Ok(Self::String),
            "F" => Ok(Self::Float),
            "I" => Ok(Self::Integer),
            "D" => Ok(Self::Date),
            "O" => Ok(Self::SelectOne),
            "M" => Ok(Self::SelectMany),
            other => Err(invalid_code("field type", other)),
        }
    }

    /// Whether values of this type are picked from lookup rows.
    #[must_use]
    pub const fn is_select(self) -> bool {
        matches!(self, Self::SelectOne | Self::SelectMany)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::String => "string",
            Self::Float => "float",
            Self::Integer => "integer",
            Self::Date => "date",
            Self::SelectOne => "select_one",
            Self::SelectMany => "select_many",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EntityType
// ---------------------------------------------------------------------------

/// Every persisted entity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    User,
    Source,
    Review,
    Question,
    SelectionCriteria,
    Keyword,
    SearchSession,
    Article,
    QualityQuestion,
    QualityAnswer,
    QualityAssessment,
    DataExtractionField,
    DataExtractionLookup,
    DataExtraction,
}

impl EntityType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Source => "source",
            Self::Review => "review",
            Self::Question => "question",
            Self::SelectionCriteria => "selection_criteria",
            Self::Keyword => "keyword",
            Self::SearchSession => "search_session",
            Self::Article => "article",
            Self::QualityQuestion => "quality_question",
            Self::QualityAnswer => "quality_answer",
            Self::QualityAssessment => "quality_assessment",
            Self::DataExtractionField => "data_extraction_field",
            Self::DataExtractionLookup => "data_extraction_lookup",
            Self::DataExtraction => "data_extraction",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
