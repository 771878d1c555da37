//! JsonSchema validation for entities whose serialized shape differs from
//! their Rust field layout.

use chrono::Utc;
use pretty_assertions::assert_eq;
use schemars::schema_for;
use sift_core::entities::*;
use sift_core::enums::*;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! validates_against_schema {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(recovered, val, "serde roundtrip failed for {}", stringify!($ty));

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn article() -> Article {
    Article {
        id: "art-a3f8b2c1".into(),
        review_id: "rev-a3f8b2c1".into(),
        bibtex_key: "beck2003".into(),
        title: "Test-Driven Development by Example".into(),
        author: "Kent Beck".into(),
        journal: String::new(),
        year: "2003".into(),
        volume: String::new(),
        pages: "1-240".into(),
        abstract_text: "A book about TDD.".into(),
        document_type: "book".into(),
        author_keywords: "tdd; testing".into(),
        note: String::new(),
        source_id: None,
        search_session_id: None,
        status: ArticleStatus::Accepted,
    }
}

validates_against_schema!(article_validates, Article, article());

validates_against_schema!(
    review_validates,
    Review,
    Review {
        id: "rev-a3f8b2c1".into(),
        name: "tdd-effects".into(),
        title: "Effects of TDD".into(),
        description: "Mapping study".into(),
        objective: "Summarize evidence".into(),
        author_id: "usr-a3f8b2c1".into(),
        status: ReviewStatus::Published,
        study_selection_strategy: Strategy::MultipleForms,
        quality_assessment_strategy: Strategy::SingleForm,
        data_extraction_strategy: Strategy::SingleForm,
        quality_assessment_cutoff_score: 1.5,
        created_at: Utc::now(),
        last_update: Utc::now(),
    }
);

validates_against_schema!(
    generic_draft_validates,
    GenericSearchSession,
    GenericSearchSession::draft("rev-a3f8b2c1")
);

validates_against_schema!(
    extraction_validates,
    DataExtraction,
    DataExtraction {
        id: "dex-a3f8b2c1".into(),
        user_id: Some("usr-a3f8b2c1".into()),
        article_id: "art-a3f8b2c1".into(),
        field_id: "def-a3f8b2c1".into(),
        value: String::new(),
        select_values: vec!["dlk-00000001".into(), "dlk-00000002".into()],
        created_at: Utc::now(),
    }
);

#[test]
fn article_abstract_serializes_under_its_column_name() {
    let json = serde_json::to_value(article()).unwrap();
    assert_eq!(json["abstract"], "A book about TDD.");
    assert!(json.get("abstract_text").is_none());
    assert_eq!(json["status"], "accepted");
}

#[test]
fn generic_session_is_tagged() {
    let json = serde_json::to_value(GenericSearchSession::draft("rev-1")).unwrap();
    assert_eq!(json["state"], "draft");
    assert_eq!(json["review_id"], "rev-1");
}
