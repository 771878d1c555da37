//! ID prefix constants.
//!
//! Every persisted row is keyed by `"{prefix}-{8 hex chars}"`, e.g.
//! `rev-a3f8b2c1`. The random part is produced by the store.

use crate::enums::EntityType;

pub const PREFIX_USER: &str = "usr";
pub const PREFIX_SOURCE: &str = "src";
pub const PREFIX_REVIEW: &str = "rev";
pub const PREFIX_QUESTION: &str = "qst";
pub const PREFIX_CRITERIA: &str = "crt";
pub const PREFIX_KEYWORD: &str = "kwd";
pub const PREFIX_SEARCH_SESSION: &str = "ses";
pub const PREFIX_ARTICLE: &str = "art";
pub const PREFIX_QUALITY_QUESTION: &str = "qqu";
pub const PREFIX_QUALITY_ANSWER: &str = "qan";
pub const PREFIX_QUALITY_ASSESSMENT: &str = "qas";
pub const PREFIX_EXTRACTION_FIELD: &str = "def";
pub const PREFIX_EXTRACTION_LOOKUP: &str = "dlk";
pub const PREFIX_DATA_EXTRACTION: &str = "dex";

/// Map an entity type to its ID prefix.
#[must_use]
pub const fn prefix_for(entity: EntityType) -> &'static str {
    match entity {
        EntityType::User => PREFIX_USER,
        EntityType::Source => PREFIX_SOURCE,
        EntityType::Review => PREFIX_REVIEW,
        EntityType::Question => PREFIX_QUESTION,
        EntityType::SelectionCriteria => PREFIX_CRITERIA,
        EntityType::Keyword => PREFIX_KEYWORD,
        EntityType::SearchSession => PREFIX_SEARCH_SESSION,
        EntityType::Article => PREFIX_ARTICLE,
        EntityType::QualityQuestion => PREFIX_QUALITY_QUESTION,
        EntityType::QualityAnswer => PREFIX_QUALITY_ANSWER,
        EntityType::QualityAssessment => PREFIX_QUALITY_ASSESSMENT,
        EntityType::DataExtractionField => PREFIX_EXTRACTION_FIELD,
        EntityType::DataExtractionLookup => PREFIX_EXTRACTION_LOOKUP,
        EntityType::DataExtraction => PREFIX_DATA_EXTRACTION,
    }
}

/// Entity type encoded in an ID, if the prefix is known.
#[must_use]
pub fn entity_type_of(id: &str) -> Option<EntityType> {
    let (prefix, _) = id.split_once('-')?;
    ALL_ENTITY_TYPES
        .iter()
        .copied()
        .find(|entity| prefix_for(*entity) == prefix)
}

const ALL_ENTITY_TYPES: [EntityType; 14] = [
    EntityType::User,
    EntityType::Source,
    EntityType::Review,
    EntityType::Question,
    EntityType::SelectionCriteria,
    EntityType::Keyword,
    EntityType::SearchSession,
    EntityType::Article,
    EntityType::QualityQuestion,
    EntityType::QualityAnswer,
    EntityType::QualityAssessment,
    EntityType::DataExtractionField,
    EntityType::DataExtractionLookup,
    EntityType::DataExtraction,
];
