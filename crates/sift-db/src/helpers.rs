//! Row-to-entity parsing helpers and shared SQL plumbing.
//!
//! Every repo converts `libsql::Row` (column-indexed) into typed entity
//! structs. These helpers isolate the parsing logic, the timestamp format,
//! and the dynamic `UPDATE ... SET` builder used by partial updates.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};

use crate::error::DatabaseError;

/// Current time truncated to the stored precision (microseconds).
///
/// Values returned to callers then compare equal to what a later read yields.
#[must_use]
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Format a timestamp for storage: fixed-width RFC 3339, so TEXT ordering
/// matches time ordering.
#[must_use]
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 and `SQLite`'s default `"%Y-%m-%d %H:%M:%S"` format
/// (rows written by `datetime('now')`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Read an INTEGER 0/1 column as `bool`.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_bool(row: &libsql::Row, idx: i32) -> Result<bool, DatabaseError> {
    Ok(row.get::<i64>(idx)? != 0)
}

/// Map a zero rows-affected count from a DELETE or UPDATE to `NoResult`.
///
/// # Errors
///
/// Returns `DatabaseError::NoResult` when `affected` is zero.
pub fn require_affected(affected: u64) -> Result<(), DatabaseError> {
    if affected == 0 {
        Err(DatabaseError::NoResult)
    } else {
        Ok(())
    }
}

/// Placeholder list `?{start}, ?{start+1}, ...` for `IN (...)` clauses.
#[must_use]
pub fn placeholders(start: usize, count: usize) -> String {
    (start..start + count)
        .map(|i| format!("?{i}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Accumulates `column = ?N` clauses and their values for a partial UPDATE.
///
/// Only columns pushed here are written; everything else keeps its stored value.
#[derive(Debug, Default)]
pub struct SetClauses {
    sets: Vec<String>,
    params: Vec<libsql::Value>,
}

impl SetClauses {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `column = ?N`.
    pub fn push(&mut self, column: &str, value: impl Into<libsql::Value>) {
        self.params.push(value.into());
        self.sets.push(format!("{column} = ?{}", self.params.len()));
    }

    /// Add `column = ?N`, writing NULL for `None`.
    pub fn push_opt<V: Into<libsql::Value>>(&mut self, column: &str, value: Option<V>) {
        match value {
            Some(v) => self.push(column, v),
            None => self.push(column, libsql::Value::Null),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Build `UPDATE {table} SET ... WHERE id = ?N` and its parameters.
    #[must_use]
    pub fn into_update(mut self, table: &str, id: &str) -> (String, Vec<libsql::Value>) {
        self.params.push(id.into());
        let sql = format!(
            "UPDATE {table} SET {} WHERE id = ?{}",
            self.sets.join(", "),
            self.params.len()
        );
        (sql, self.params)
    }
}
