//! Literature source repository.
//!
//! URLs are normalized on every write (see `sift_core::rules::normalize_source_url`).

use sift_core::entities::Source;
use sift_core::ids::PREFIX_SOURCE;
use sift_core::rules::normalize_source_url;

use crate::error::DatabaseError;
use crate::helpers::{SetClauses, get_bool, require_affected};
use crate::service::ReviewService;
use crate::updates::source::SourceUpdate;

const SELECT_COLS: &str = "id, name, url, is_default";

pub(crate) fn row_to_source(row: &libsql::Row) -> Result<Source, DatabaseError> {
    Ok(Source {
        id: row.get(0)?,
        name: row.get(1)?,
        url: row.get(2)?,
        is_default: get_bool(row, 3)?,
    })
}

impl ReviewService {
    pub async fn create_source(
        &self,
        name: &str,
        url: &str,
        is_default: bool,
    ) -> Result<Source, DatabaseError> {
        let id = self.db().generate_id(PREFIX_SOURCE).await?;
        let url = normalize_source_url(url);

        self.db()
            .conn()
            .execute(
                &format!("INSERT INTO sources ({SELECT_COLS}) VALUES (?1, ?2, ?3, ?4)"),
                libsql::params![id.as_str(), name, url.as_str(), i64::from(is_default)],
            )
            .await?;

        Ok(Source {
            id,
            name: name.to_string(),
            url,
            is_default,
        })
    }

    pub async fn get_source(&self, id: &str) -> Result<Source, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM sources WHERE id = ?1"), [id])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_source(&row)
    }

    pub async fn update_source(
        &self,
        source_id: &str,
        update: SourceUpdate,
    ) -> Result<Source, DatabaseError> {
        let mut sets = SetClauses::new();
        if let Some(name) = update.name {
            sets.push("name", name);
        }
        if let Some(url) = update.url {
            sets.push("url", normalize_source_url(&url));
        }
        if let Some(is_default) = update.is_default {
            sets.push("is_default", i64::from(is_default));
        }

        if sets.is_empty() {
            return self.get_source(source_id).await;
        }

        let (sql, params) = sets.into_update("sources", source_id);
        let affected = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        require_affected(affected)?;
        self.get_source(source_id).await
    }

    /// Store a new URL for a source, normalized.
    pub async fn set_source_url(&self, source_id: &str, value: &str) -> Result<Source, DatabaseError> {
        let mut source = self.get_source(source_id).await?;
        source.set_url(value);
        self.db()
            .conn()
            .execute(
                "UPDATE sources SET url = ?1 WHERE id = ?2",
                libsql::params![source.url.as_str(), source_id],
            )
            .await?;
        Ok(source)
    }

    /// Delete a source. Search sessions run against it are deleted with it;
    /// articles found there keep their rows with the source link cleared.
    pub async fn delete_source(&self, id: &str) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute("DELETE FROM sources WHERE id = ?1", [id])
            .await?;
        require_affected(affected)
    }

    /// All sources, ordered by name.
    pub async fn list_sources(&self) -> Result<Vec<Source>, DatabaseError> {
        self.query_sources(&format!("SELECT {SELECT_COLS} FROM sources ORDER BY name"))
            .await
    }

    /// Sources flagged as defaults for new reviews, ordered by name.
    pub async fn default_sources(&self) -> Result<Vec<Source>, DatabaseError> {
        self.query_sources(&format!(
            "SELECT {SELECT_COLS} FROM sources WHERE is_default = 1 ORDER BY name"
        ))
        .await
    }

    async fn query_sources(&self, sql: &str) -> Result<Vec<Source>, DatabaseError> {
        let mut rows = self.db().conn().query(sql, ()).await?;
        let mut sources = Vec::new();
        while let Some(row) = rows.next().await? {
            sources.push(row_to_source(&row)?);
        }
        Ok(sources)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::error::DatabaseError;
    use crate::test_support::helpers::test_service;
    use crate::updates::source::SourceUpdateBuilder;

    #[rstest]
    #[case("", "")]
    #[case("ieeexplore.ieee.org", "http://ieeexplore.ieee.org")]
    #[case("https://dl.acm.org", "https://dl.acm.org")]
    #[tokio::test]
    async fn create_source_normalizes_url(#[case] input: &str, #[case] stored: &str) {
        let svc = test_service().await;
        let source = svc.create_source("Library", input, false).await.unwrap();
        assert_eq!(source.url, stored);
        assert_eq!(svc.get_source(&source.id).await.unwrap().url, stored);
    }

    #[tokio::test]
    async fn update_source_normalizes_url() {
        let svc = test_service().await;
        let source = svc.create_source("Scopus", "", false).await.unwrap();

        let update = SourceUpdateBuilder::new().url("www.scopus.com").build();
        let updated = svc.update_source(&source.id, update).await.unwrap();
        assert_eq!(updated.url, "http://www.scopus.com");
        assert_eq!(updated.name, "Scopus");
    }

    #[tokio::test]
    async fn set_source_url_persists() {
        let svc = test_service().await;
        let source = svc.create_source("ACM", "", false).await.unwrap();

        let updated = svc.set_source_url(&source.id, "dl.acm.org").await.unwrap();
        assert_eq!(updated.url, "http://dl.acm.org");
        assert_eq!(svc.get_source(&source.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn sources_listed_by_name_and_defaults_filtered() {
        let svc = test_service().await;
        svc.create_source("Scopus", "", true).await.unwrap();
        svc.create_source("ACM", "", false).await.unwrap();
        svc.create_source("IEEE", "", true).await.unwrap();

        let all: Vec<String> = svc
            .list_sources()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(all, ["ACM", "IEEE", "Scopus"]);

        let defaults: Vec<String> = svc
            .default_sources()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(defaults, ["IEEE", "Scopus"]);
    }

    #[tokio::test]
    async fn delete_source() {
        let svc = test_service().await;
        let source = svc.create_source("ACM", "", false).await.unwrap();
        svc.delete_source(&source.id).await.unwrap();
        assert!(matches!(
            svc.get_source(&source.id).await,
            Err(DatabaseError::NoResult)
        ));
    }
}
