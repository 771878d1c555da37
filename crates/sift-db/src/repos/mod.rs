//! Repository modules implementing CRUD and review-scoped queries.
//!
//! Each module adds methods to `ReviewService` via `impl ReviewService` blocks.

pub mod article;
pub mod criteria;
pub mod extraction;
pub mod keyword;
pub mod quality;
pub mod question;
pub mod review;
pub mod search_session;
pub mod source;
pub mod user;
