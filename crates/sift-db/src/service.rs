//! Service layer holding the store and the write-time rules.
//!
//! `ReviewService` wraps `SiftDb` (raw database access) and the description
//! policy applied to criteria and keywords. All repo methods are implemented
//! as `impl ReviewService` blocks in [`crate::repos`].

use sift_config::StoreConfig;
use sift_core::rules::{DESCRIPTION_MAX_CHARS, enforce_description_limit};

use crate::SiftDb;
use crate::error::{DatabaseError, rule_violation};

/// How over-length criteria and keyword descriptions are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DescriptionPolicy {
    /// Maximum stored length, in characters.
    pub limit: usize,
    /// Reject instead of truncating.
    pub strict: bool,
}

impl Default for DescriptionPolicy {
    fn default() -> Self {
        Self {
            limit: DESCRIPTION_MAX_CHARS,
            strict: false,
        }
    }
}

/// Entry point for every CRUD and review-scoped query.
pub struct ReviewService {
    db: SiftDb,
    descriptions: DescriptionPolicy,
}

impl ReviewService {
    /// Create a service over a local database with default rules.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the libSQL database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = SiftDb::open_local(db_path).await?;
        Ok(Self::from_db(db))
    }

    /// Create a service from the `[store]` configuration section.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn from_config(config: &StoreConfig) -> Result<Self, DatabaseError> {
        let db = SiftDb::open_local(&config.path).await?;
        Ok(Self::from_db(db).with_description_policy(DescriptionPolicy {
            limit: config.description_limit,
            strict: config.strict_descriptions,
        }))
    }

    /// Create from an existing `SiftDb` (for testing).
    #[must_use]
    pub fn from_db(db: SiftDb) -> Self {
        Self {
            db,
            descriptions: DescriptionPolicy::default(),
        }
    }

    #[must_use]
    pub const fn with_description_policy(mut self, policy: DescriptionPolicy) -> Self {
        self.descriptions = policy;
        self
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &SiftDb {
        &self.db
    }

    #[must_use]
    pub const fn description_policy(&self) -> DescriptionPolicy {
        self.descriptions
    }

    /// Apply the description policy to criteria/keyword text before a write.
    pub(crate) fn checked_description(&self, description: &str) -> Result<String, DatabaseError> {
        enforce_description_limit(description, self.descriptions.limit, self.descriptions.strict)
            .map_err(rule_violation)
    }
}
