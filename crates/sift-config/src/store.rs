//! Review store configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default database location, relative to the project root.
fn default_path() -> String {
    String::from(".sift/sift.db")
}

/// Longest criteria/keyword description a review may store, in characters.
/// Configuration can tighten it, never widen it.
pub const MAX_DESCRIPTION_LIMIT: usize = 200;

const fn default_description_limit() -> usize {
    MAX_DESCRIPTION_LIMIT
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// libSQL database file, or `:memory:`.
    #[serde(default = "default_path")]
    pub path: String,

    /// Reject over-length criteria/keyword descriptions instead of truncating.
    #[serde(default)]
    pub strict_descriptions: bool,

    /// Maximum stored length of criteria/keyword descriptions, at most
    /// [`MAX_DESCRIPTION_LIMIT`].
    #[serde(default = "default_description_limit")]
    pub description_limit: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            strict_descriptions: false,
            description_limit: default_description_limit(),
        }
    }
}

impl StoreConfig {
    pub fn is_in_memory(&self) -> bool {
        self.path == ":memory:"
    }

    /// Check field values that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an empty path, or a description
    /// limit outside `1..=MAX_DESCRIPTION_LIMIT`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "store.path".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.description_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "store.description_limit".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if self.description_limit > MAX_DESCRIPTION_LIMIT {
            return Err(ConfigError::InvalidValue {
                field: "store.description_limit".into(),
                reason: format!("must not exceed {MAX_DESCRIPTION_LIMIT}"),
            });
        }
        Ok(())
    }
}
