//! Entity structs for all Sift domain objects.
//!
//! Each entity maps to a table in the libSQL database (see
//! `sift-db/migrations/001_initial.sql`). All structs derive `Serialize`,
//! `Deserialize`, and `JsonSchema` for JSON roundtrip and schema validation.
//! Relations are carried as ID strings; many-to-many links (review co-authors,
//! review sources, extraction selections) live in their own tables.

mod article;
mod criteria;
mod extraction;
mod keyword;
mod quality;
mod question;
mod review;
mod search_session;
mod source;
mod user;

pub use article::Article;
pub use criteria::SelectionCriteria;
pub use extraction::{DataExtraction, DataExtractionField, DataExtractionLookup};
pub use keyword::Keyword;
pub use quality::{QualityAnswer, QualityAssessment, QualityQuestion};
pub use question::{Pico, Question};
pub use review::Review;
pub use search_session::{GenericSearchSession, SearchSession};
pub use source::Source;
pub use user::User;
