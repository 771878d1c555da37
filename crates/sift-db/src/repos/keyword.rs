//! Keyword repository.
//!
//! A keyword may point at another keyword of the same review through
//! `synonym_of`; root keywords have none.

use sift_core::entities::Keyword;
use sift_core::ids::PREFIX_KEYWORD;

use crate::error::DatabaseError;
use crate::helpers::{SetClauses, get_opt_string, require_affected};
use crate::service::ReviewService;
use crate::updates::keyword::KeywordUpdate;

const SELECT_COLS: &str = "id, review_id, description, synonym_of";

fn row_to_keyword(row: &libsql::Row) -> Result<Keyword, DatabaseError> {
    Ok(Keyword {
        id: row.get(0)?,
        review_id: row.get(1)?,
        description: row.get(2)?,
        synonym_of: get_opt_string(row, 3)?,
    })
}

impl ReviewService {
    pub async fn create_keyword(
        &self,
        review_id: &str,
        description: &str,
        synonym_of: Option<&str>,
    ) -> Result<Keyword, DatabaseError> {
        let description = self.checked_description(description)?;
        if let Some(target) = synonym_of {
            self.check_synonym_target(review_id, None, target).await?;
        }
        let id = self.db().generate_id(PREFIX_KEYWORD).await?;

        self.db()
            .conn()
            .execute(
                &format!("INSERT INTO keywords ({SELECT_COLS}) VALUES (?1, ?2, ?3, ?4)"),
                libsql::params![id.as_str(), review_id, description.as_str(), synonym_of],
            )
            .await?;

        Ok(Keyword {
            id,
            review_id: review_id.to_string(),
            description,
            synonym_of: synonym_of.map(String::from),
        })
    }

    pub async fn get_keyword(&self, id: &str) -> Result<Keyword, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM keywords WHERE id = ?1"), [id])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_keyword(&row)
    }

    pub async fn update_keyword(
        &self,
        keyword_id: &str,
        update: KeywordUpdate,
    ) -> Result<Keyword, DatabaseError> {
        let current = self.get_keyword(keyword_id).await?;

        let mut sets = SetClauses::new();
        if let Some(description) = update.description {
            sets.push("description", self.checked_description(&description)?);
        }
        if let Some(synonym_of) = update.synonym_of {
            if let Some(target) = synonym_of.as_deref() {
                self.check_synonym_target(&current.review_id, Some(keyword_id), target)
                    .await?;
            }
            sets.push_opt("synonym_of", synonym_of);
        }

        if sets.is_empty() {
            return Ok(current);
        }

        let (sql, params) = sets.into_update("keywords", keyword_id);
        self.db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        self.get_keyword(keyword_id).await
    }

    /// Delete a keyword. Its synonyms become root keywords.
    pub async fn delete_keyword(&self, id: &str) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute("DELETE FROM keywords WHERE id = ?1", [id])
            .await?;
        require_affected(affected)
    }

    pub async fn keywords_of(&self, review_id: &str) -> Result<Vec<Keyword>, DatabaseError> {
        self.query_keywords(
            &format!(
                "SELECT {SELECT_COLS} FROM keywords WHERE review_id = ?1 ORDER BY description ASC"
            ),
            libsql::params![review_id],
        )
        .await
    }

    /// Keywords that are not synonyms of another, ordered by description.
    pub async fn root_keywords_of(&self, review_id: &str) -> Result<Vec<Keyword>, DatabaseError> {
        self.query_keywords(
            &format!(
                "SELECT {SELECT_COLS} FROM keywords
                 WHERE review_id = ?1 AND synonym_of IS NULL
                 ORDER BY description ASC"
            ),
            libsql::params![review_id],
        )
        .await
    }

    /// Synonyms of `keyword_id`, restricted to the keyword's own review.
    pub async fn synonyms_of(&self, keyword_id: &str) -> Result<Vec<Keyword>, DatabaseError> {
        let keyword = self.get_keyword(keyword_id).await?;
        self.query_keywords(
            &format!(
                "SELECT {SELECT_COLS} FROM keywords
                 WHERE review_id = ?1 AND synonym_of = ?2
                 ORDER BY description ASC"
            ),
            libsql::params![keyword.review_id.as_str(), keyword_id],
        )
        .await
    }

    /// A synonym target must be a root keyword of the same review, other than
    /// the keyword being written. A keyword that still has synonyms cannot
    /// itself become a synonym, so chains and cycles never form.
    async fn check_synonym_target(
        &self,
        review_id: &str,
        keyword_id: Option<&str>,
        target: &str,
    ) -> Result<(), DatabaseError> {
        if keyword_id == Some(target) {
            return Err(DatabaseError::Validation(format!(
                "keyword {target} cannot be a synonym of itself"
            )));
        }
        let target_keyword = match self.get_keyword(target).await {
            Ok(keyword) => keyword,
            Err(DatabaseError::NoResult) => {
                return Err(DatabaseError::Validation(format!(
                    "synonym target {target} does not exist"
                )));
            }
            Err(e) => return Err(e),
        };
        if target_keyword.review_id != review_id {
            return Err(DatabaseError::Validation(format!(
                "synonym target {target} belongs to another review"
            )));
        }
        if let Some(root) = &target_keyword.synonym_of {
            return Err(DatabaseError::Validation(format!(
                "synonym target {target} is itself a synonym of {root}"
            )));
        }
        if let Some(keyword_id) = keyword_id {
            let mut rows = self
                .db()
                .conn()
                .query(
                    "SELECT COUNT(*) FROM keywords WHERE synonym_of = ?1",
                    [keyword_id],
                )
                .await?;
            let synonyms = match rows.next().await? {
                Some(row) => row.get::<i64>(0)?,
                None => 0,
            };
            if synonyms > 0 {
                return Err(DatabaseError::Validation(format!(
                    "keyword {keyword_id} has {synonyms} synonym(s) and cannot become a synonym"
                )));
            }
        }
        Ok(())
    }

    async fn query_keywords(
        &self,
        sql: &str,
        params: impl libsql::params::IntoParams,
    ) -> Result<Vec<Keyword>, DatabaseError> {
        let mut rows = self.db().conn().query(sql, params).await?;
        let mut keywords = Vec::new();
        while let Some(row) = rows.next().await? {
            keywords.push(row_to_keyword(&row)?);
        }
        Ok(keywords)
    }
}
