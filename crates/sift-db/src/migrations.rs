//! Schema setup. The SQL is compiled into the binary and every statement is
//! `IF NOT EXISTS`, so opening an existing store re-applies it harmlessly.

use crate::SiftDb;
use crate::error::DatabaseError;

const SCHEMA: &[(&str, &str)] = &[("001_initial", include_str!("../migrations/001_initial.sql"))];

impl SiftDb {
    pub(crate) async fn run_migrations(&self) -> Result<(), DatabaseError> {
        for (name, sql) in SCHEMA {
            self.conn
                .execute_batch(sql)
                .await
                .map_err(|e| DatabaseError::Migration(format!("{name}: {e}")))?;
            tracing::debug!(migration = name, "schema applied");
        }
        Ok(())
    }
}
