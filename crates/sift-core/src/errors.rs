//! Cross-cutting error types for Sift.
//!
//! Store errors (`DatabaseError`) and configuration errors (`ConfigError`)
//! live in their own crates. The CLI folds everything into `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Sift crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A stored single-character code does not name any variant.
    #[error("Invalid {kind} code: '{code}'")]
    InvalidCode { kind: String, code: String },

    /// Data failed validation (format, length, cross-entity constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
