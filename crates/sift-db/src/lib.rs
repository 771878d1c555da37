//! # sift-db
//!
//! Relational store for Sift review data, on libSQL in local mode.
//!
//! A review owns its questions, selection criteria, keywords, search
//! sessions, articles, quality assessment setup and data extraction setup.
//! [`ReviewService`] exposes the CRUD and review-scoped queries over them;
//! each file under [`repos`] adds one `impl ReviewService` block.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;
mod test_support;
pub mod updates;

use error::DatabaseError;

pub use service::ReviewService;

/// An open review store: the libSQL database plus the one connection every
/// operation runs on.
pub struct SiftDb {
    // Dropping the database handle closes the file, so it lives as long as `conn`.
    _database: libsql::Database,
    conn: libsql::Connection,
}

impl SiftDb {
    /// Open (or create) the store at `path`. `":memory:"` gives a throwaway
    /// store. The schema is brought up to date before this returns.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` when the file cannot be opened, foreign keys
    /// cannot be switched on, or a migration fails.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let database = libsql::Builder::new_local(path).build().await?;
        let conn = database.connect()?;
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("enabling foreign keys: {e}")))?;

        let store = Self {
            _database: database,
            conn,
        };
        store.run_migrations().await?;
        tracing::debug!(path, "review store ready");
        Ok(store)
    }

    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// New entity ID: `prefix`, a dash, and 8 random hex digits from
    /// `randomblob(4)`, e.g. `"rev-a3f8b2c1"`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the store cannot produce the random value.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query("SELECT lower(hex(randomblob(4)))", ())
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let suffix: String = row.get(0)?;
        Ok(format!("{prefix}-{suffix}"))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    const TABLES: [&str; 17] = [
        "articles",
        "data_extraction_selections",
        "data_extractions",
        "extraction_fields",
        "extraction_lookups",
        "keywords",
        "quality_answers",
        "quality_assessments",
        "quality_questions",
        "questions",
        "review_co_authors",
        "review_sources",
        "reviews",
        "search_sessions",
        "selection_criteria",
        "sources",
        "users",
    ];

    async fn memory_store() -> SiftDb {
        SiftDb::open_local(":memory:").await.unwrap()
    }

    async fn table_names(store: &SiftDb) -> Vec<String> {
        let mut rows = store
            .conn()
            .query(
                "SELECT name FROM sqlite_master
                 WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
                 ORDER BY name",
                (),
            )
            .await
            .unwrap();
        let mut names = Vec::new();
        while let Some(row) = rows.next().await.unwrap() {
            names.push(row.get::<String>(0).unwrap());
        }
        names
    }

    #[tokio::test]
    async fn fresh_store_has_every_table() {
        let store = memory_store().await;
        assert_eq!(table_names(&store).await, TABLES.to_vec());
    }

    #[tokio::test]
    async fn migrating_again_changes_nothing() {
        let store = memory_store().await;
        store.run_migrations().await.unwrap();
        assert_eq!(table_names(&store).await, TABLES.to_vec());
    }

    #[tokio::test]
    async fn ids_are_prefixed_hex_and_distinct() {
        let store = memory_store().await;
        let mut seen = HashSet::new();
        for _ in 0..50 {
            let id = store.generate_id("kwd").await.unwrap();
            let suffix = id.strip_prefix("kwd-").unwrap();
            assert_eq!(suffix.len(), 8, "{id}");
            assert!(suffix.bytes().all(|b| b.is_ascii_hexdigit()), "{id}");
            seen.insert(id);
        }
        assert_eq!(seen.len(), 50);
    }

    #[tokio::test]
    async fn orphan_rows_are_refused() {
        let store = memory_store().await;
        let orphan = store
            .conn()
            .execute(
                "INSERT INTO keywords (id, review_id, description) VALUES ('kwd-1', 'rev-none', 'x')",
                (),
            )
            .await;
        assert!(orphan.is_err());
    }
}
