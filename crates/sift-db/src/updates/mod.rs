//! Update builder types for entity mutations.
//!
//! Each builder produces an update struct with `Option` fields. Only `Some`
//! fields generate SET clauses in the dynamic UPDATE SQL. Nullable columns use
//! `Option<Option<T>>`: `Some(None)` clears the column.

pub mod article;
pub mod criteria;
pub mod extraction;
pub mod keyword;
pub mod question;
pub mod review;
pub mod source;
