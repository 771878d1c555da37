//! Database error types for sift-db.

use sift_core::errors::CoreError;
use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed or returned data that could not be decoded.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Invalid state encountered (e.g., bad data in DB).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Input rejected before it reached the database.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Underlying libSQL error (constraint violations, I/O).
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Domain rule or stored-code error from sift-core.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Surface a domain rule violation as a store validation error.
///
/// `CoreError::Validation` becomes `DatabaseError::Validation`; other core
/// errors pass through as `DatabaseError::Core`.
pub(crate) fn rule_violation(err: CoreError) -> DatabaseError {
    match err {
        CoreError::Validation(msg) => DatabaseError::Validation(msg),
        other => DatabaseError::Core(other),
    }
}
