//! Article repository: screening records of a review.

use sift_core::entities::Article;
use sift_core::enums::ArticleStatus;
use sift_core::ids::PREFIX_ARTICLE;

use crate::error::DatabaseError;
use crate::helpers::{SetClauses, get_opt_string, require_affected};
use crate::service::ReviewService;
use crate::updates::article::ArticleUpdate;

const SELECT_COLS: &str = "id, review_id, bibtex_key, title, author, journal, year, volume, \
     pages, abstract, document_type, author_keywords, note, source_id, search_session_id, status";

fn row_to_article(row: &libsql::Row) -> Result<Article, DatabaseError> {
    Ok(Article {
        id: row.get(0)?,
        review_id: row.get(1)?,
        bibtex_key: row.get(2)?,
        title: row.get(3)?,
        author: row.get(4)?,
        journal: row.get(5)?,
        year: row.get(6)?,
        volume: row.get(7)?,
        pages: row.get(8)?,
        abstract_text: row.get(9)?,
        document_type: row.get(10)?,
        author_keywords: row.get(11)?,
        note: row.get(12)?,
        source_id: get_opt_string(row, 13)?,
        search_session_id: get_opt_string(row, 14)?,
        status: ArticleStatus::from_code(&row.get::<String>(15)?)?,
    })
}

/// Field values for a new article. Every text field defaults to empty and the
/// status to unclassified.
#[derive(Debug, Clone, Default)]
pub struct NewArticle {
    pub bibtex_key: String,
    pub title: String,
    pub author: String,
    pub journal: String,
    pub year: String,
    pub volume: String,
    pub pages: String,
    pub abstract_text: String,
    pub document_type: String,
    pub author_keywords: String,
    pub note: String,
    pub source_id: Option<String>,
    pub search_session_id: Option<String>,
    pub status: ArticleStatus,
}

impl ReviewService {
    pub async fn create_article(
        &self,
        review_id: &str,
        new: &NewArticle,
    ) -> Result<Article, DatabaseError> {
        let id = self.db().generate_id(PREFIX_ARTICLE).await?;

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO articles ({SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16)"
                ),
                libsql::params![
                    id.as_str(),
                    review_id,
                    new.bibtex_key.as_str(),
                    new.title.as_str(),
                    new.author.as_str(),
                    new.journal.as_str(),
                    new.year.as_str(),
                    new.volume.as_str(),
                    new.pages.as_str(),
                    new.abstract_text.as_str(),
                    new.document_type.as_str(),
                    new.author_keywords.as_str(),
                    new.note.as_str(),
                    new.source_id.as_deref(),
                    new.search_session_id.as_deref(),
                    new.status.code()
                ],
            )
            .await?;

        Ok(Article {
            id,
            review_id: review_id.to_string(),
            bibtex_key: new.bibtex_key.clone(),
            title: new.title.clone(),
            author: new.author.clone(),
            journal: new.journal.clone(),
            year: new.year.clone(),
            volume: new.volume.clone(),
            pages: new.pages.clone(),
            abstract_text: new.abstract_text.clone(),
            document_type: new.document_type.clone(),
            author_keywords: new.author_keywords.clone(),
            note: new.note.clone(),
            source_id: new.source_id.clone(),
            search_session_id: new.search_session_id.clone(),
            status: new.status,
        })
    }

    pub async fn get_article(&self, id: &str) -> Result<Article, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM articles WHERE id = ?1"), [id])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_article(&row)
    }

    pub async fn update_article(
        &self,
        article_id: &str,
        update: ArticleUpdate,
    ) -> Result<Article, DatabaseError> {
        let mut sets = SetClauses::new();
        let text_fields = [
            ("bibtex_key", update.bibtex_key),
            ("title", update.title),
            ("author", update.author),
            ("journal", update.journal),
            ("year", update.year),
            ("volume", update.volume),
            ("pages", update.pages),
            ("abstract", update.abstract_text),
            ("document_type", update.document_type),
            ("author_keywords", update.author_keywords),
            ("note", update.note),
        ];
        for (column, value) in text_fields {
            if let Some(value) = value {
                sets.push(column, value);
            }
        }
        if let Some(source_id) = update.source_id {
            sets.push_opt("source_id", source_id);
        }
        if let Some(search_session_id) = update.search_session_id {
            sets.push_opt("search_session_id", search_session_id);
        }
        if let Some(status) = update.status {
            sets.push("status", status.code());
        }

        if sets.is_empty() {
            return self.get_article(article_id).await;
        }

        let (sql, params) = sets.into_update("articles", article_id);
        let affected = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        require_affected(affected)?;
        self.get_article(article_id).await
    }

    /// Change an article's screening label. Any label may follow any other.
    pub async fn set_article_status(
        &self,
        article_id: &str,
        status: ArticleStatus,
    ) -> Result<Article, DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute(
                "UPDATE articles SET status = ?1 WHERE id = ?2",
                [status.code(), article_id],
            )
            .await?;
        require_affected(affected)?;
        self.get_article(article_id).await
    }

    /// Delete an article with its assessments and extractions.
    pub async fn delete_article(&self, id: &str) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute("DELETE FROM articles WHERE id = ?1", [id])
            .await?;
        require_affected(affected)
    }

    /// Articles of a review, optionally only those from one source.
    pub async fn articles_of(
        &self,
        review_id: &str,
        source_id: Option<&str>,
    ) -> Result<Vec<Article>, DatabaseError> {
        match source_id {
            Some(source_id) => {
                self.query_articles(
                    &format!(
                        "SELECT {SELECT_COLS} FROM articles
                         WHERE review_id = ?1 AND source_id = ?2
                         ORDER BY rowid"
                    ),
                    libsql::params![review_id, source_id],
                )
                .await
            }
            None => {
                self.query_articles(
                    &format!(
                        "SELECT {SELECT_COLS} FROM articles WHERE review_id = ?1 ORDER BY rowid"
                    ),
                    libsql::params![review_id],
                )
                .await
            }
        }
    }

    pub async fn accepted_articles_of(&self, review_id: &str) -> Result<Vec<Article>, DatabaseError> {
        self.query_articles(
            &format!(
                "SELECT {SELECT_COLS} FROM articles
                 WHERE review_id = ?1 AND status = ?2
                 ORDER BY rowid"
            ),
            libsql::params![review_id, ArticleStatus::Accepted.code()],
        )
        .await
    }

    async fn query_articles(
        &self,
        sql: &str,
        params: impl libsql::params::IntoParams,
    ) -> Result<Vec<Article>, DatabaseError> {
        let mut rows = self.db().conn().query(sql, params).await?;
        let mut articles = Vec::new();
        while let Some(row) = rows.next().await? {
            articles.push(row_to_article(&row)?);
        }
        Ok(articles)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::NewArticle;
    use crate::test_support::helpers::{test_article, test_review, test_service};
    use crate::updates::article::ArticleUpdateBuilder;
    use sift_core::enums::ArticleStatus;

    #[tokio::test]
    async fn create_article_roundtrip() {
        let svc = test_service().await;
        let (_, review) = test_review(&svc).await;
        let new = NewArticle {
            bibtex_key: "beck2003".into(),
            title: "Test-Driven Development by Example".into(),
            author: "Kent Beck".into(),
            year: "2003".into(),
            abstract_text: "Clean code that works.".into(),
            ..Default::default()
        };

        let article = svc.create_article(&review.id, &new).await.unwrap();
        assert!(article.id.starts_with("art-"));
        assert_eq!(article.status, ArticleStatus::Unclassified);
        assert_eq!(svc.get_article(&article.id).await.unwrap(), article);
    }

    #[tokio::test]
    async fn update_article_partial() {
        let svc = test_service().await;
        let (_, review) = test_review(&svc).await;
        let article = test_article(&svc, &review.id, "Original").await;

        let update = ArticleUpdateBuilder::new()
            .journal("IEEE Software")
            .abstract_text("An abstract.")
            .build();
        let updated = svc.update_article(&article.id, update).await.unwrap();
        assert_eq!(updated.title, "Original");
        assert_eq!(updated.journal, "IEEE Software");
        assert_eq!(updated.abstract_text, "An abstract.");
    }

    #[tokio::test]
    async fn articles_filtered_by_source() {
        let svc = test_service().await;
        let (_, review) = test_review(&svc).await;
        let scopus = svc.create_source("Scopus", "", false).await.unwrap();

        test_article(&svc, &review.id, "Unsourced").await;
        svc.create_article(
            &review.id,
            &NewArticle {
                title: "From Scopus".into(),
                source_id: Some(scopus.id.clone()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(svc.articles_of(&review.id, None).await.unwrap().len(), 2);
        let filtered = svc.articles_of(&review.id, Some(&scopus.id)).await.unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "From Scopus");
    }

    #[tokio::test]
    async fn accepted_articles_follow_status() {
        let svc = test_service().await;
        let (_, review) = test_review(&svc).await;
        let keep = test_article(&svc, &review.id, "Keep").await;
        let drop = test_article(&svc, &review.id, "Drop").await;

        svc.set_article_status(&keep.id, ArticleStatus::Accepted)
            .await
            .unwrap();
        svc.set_article_status(&drop.id, ArticleStatus::Rejected)
            .await
            .unwrap();

        let accepted = svc.accepted_articles_of(&review.id).await.unwrap();
        assert_eq!(accepted.len(), 1);
        assert_eq!(accepted[0].id, keep.id);

        // Labels carry no transition rules.
        let back = svc
            .set_article_status(&drop.id, ArticleStatus::Unclassified)
            .await
            .unwrap();
        assert_eq!(back.status, ArticleStatus::Unclassified);
    }

    #[tokio::test]
    async fn delete_article() {
        let svc = test_service().await;
        let (_, review) = test_review(&svc).await;
        let article = test_article(&svc, &review.id, "Gone").await;
        svc.delete_article(&article.id).await.unwrap();
        assert!(svc.get_article(&article.id).await.is_err());
    }
}
