//! Search session repository, including the review's generic session.

use sift_core::entities::{GenericSearchSession, SearchSession};
use sift_core::ids::PREFIX_SEARCH_SESSION;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, require_affected};
use crate::service::ReviewService;

const SELECT_COLS: &str = "id, review_id, source_id, search_string";

fn row_to_session(row: &libsql::Row) -> Result<SearchSession, DatabaseError> {
    Ok(SearchSession {
        id: row.get(0)?,
        review_id: row.get(1)?,
        source_id: get_opt_string(row, 2)?,
        search_string: row.get(3)?,
    })
}

impl ReviewService {
    pub async fn create_search_session(
        &self,
        review_id: &str,
        source_id: Option<&str>,
        search_string: &str,
    ) -> Result<SearchSession, DatabaseError> {
        let id = self.db().generate_id(PREFIX_SEARCH_SESSION).await?;

        self.db()
            .conn()
            .execute(
                &format!("INSERT INTO search_sessions ({SELECT_COLS}) VALUES (?1, ?2, ?3, ?4)"),
                libsql::params![id.as_str(), review_id, source_id, search_string],
            )
            .await?;

        Ok(SearchSession {
            id,
            review_id: review_id.to_string(),
            source_id: source_id.map(String::from),
            search_string: search_string.to_string(),
        })
    }

    pub async fn get_search_session(&self, id: &str) -> Result<SearchSession, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM search_sessions WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_session(&row)
    }

    /// Replace the search string of a session.
    pub async fn update_search_session(
        &self,
        session_id: &str,
        search_string: &str,
    ) -> Result<SearchSession, DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute(
                "UPDATE search_sessions SET search_string = ?1 WHERE id = ?2",
                [search_string, session_id],
            )
            .await?;
        require_affected(affected)?;
        self.get_search_session(session_id).await
    }

    pub async fn delete_search_session(&self, id: &str) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute("DELETE FROM search_sessions WHERE id = ?1", [id])
            .await?;
        require_affected(affected)
    }

    pub async fn search_sessions_of(
        &self,
        review_id: &str,
    ) -> Result<Vec<SearchSession>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM search_sessions WHERE review_id = ?1 ORDER BY rowid"
                ),
                [review_id],
            )
            .await?;

        let mut sessions = Vec::new();
        while let Some(row) = rows.next().await? {
            sessions.push(row_to_session(&row)?);
        }
        Ok(sessions)
    }

    /// The review's source-less session, or an unsaved draft bound to the
    /// review when none is stored. Nothing is written.
    pub async fn generic_search_session_of(
        &self,
        review_id: &str,
    ) -> Result<GenericSearchSession, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM search_sessions
                     WHERE review_id = ?1 AND source_id IS NULL
                     ORDER BY rowid LIMIT 1"
                ),
                [review_id],
            )
            .await?;

        match rows.next().await? {
            Some(row) => Ok(GenericSearchSession::Saved(row_to_session(&row)?)),
            None => Ok(GenericSearchSession::draft(review_id)),
        }
    }

    /// Persist a generic session: a draft is inserted, a saved session has its
    /// search string written back.
    pub async fn save_generic_search_session(
        &self,
        session: &GenericSearchSession,
    ) -> Result<SearchSession, DatabaseError> {
        match session {
            GenericSearchSession::Saved(saved) => {
                self.update_search_session(&saved.id, &saved.search_string)
                    .await
            }
            GenericSearchSession::Draft {
                review_id,
                search_string,
            } => {
                if let GenericSearchSession::Saved(existing) =
                    self.generic_search_session_of(review_id).await?
                {
                    return self
                        .update_search_session(&existing.id, search_string)
                        .await;
                }
                self.create_search_session(review_id, None, search_string)
                    .await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::error::DatabaseError;
    use crate::test_support::helpers::{test_review, test_service};
    use sift_core::entities::GenericSearchSession;

    #[tokio::test]
    async fn generic_session_is_draft_until_saved() {
        let svc = test_service().await;
        let (_, review) = test_review(&svc).await;

        let generic = svc.generic_search_session_of(&review.id).await.unwrap();
        assert_eq!(generic, GenericSearchSession::draft(review.id.as_str()));
        assert!(svc.search_sessions_of(&review.id).await.unwrap().is_empty());

        let draft = GenericSearchSession::Draft {
            review_id: review.id.clone(),
            search_string: "tdd AND quality".into(),
        };
        let saved = svc.save_generic_search_session(&draft).await.unwrap();
        assert!(saved.is_generic());

        let generic = svc.generic_search_session_of(&review.id).await.unwrap();
        assert_eq!(generic, GenericSearchSession::Saved(saved));
    }

    #[tokio::test]
    async fn saving_a_second_draft_updates_the_stored_session() {
        let svc = test_service().await;
        let (_, review) = test_review(&svc).await;

        let first = svc
            .save_generic_search_session(&GenericSearchSession::draft(review.id.as_str()))
            .await
            .unwrap();
        let second = svc
            .save_generic_search_session(&GenericSearchSession::Draft {
                review_id: review.id.clone(),
                search_string: "tdd".into(),
            })
            .await
            .unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(second.search_string, "tdd");
        assert_eq!(svc.search_sessions_of(&review.id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn sourced_sessions_are_not_generic() {
        let svc = test_service().await;
        let (_, review) = test_review(&svc).await;
        let scopus = svc.create_source("Scopus", "", false).await.unwrap();
        svc.create_search_session(&review.id, Some(&scopus.id), "TITLE(tdd)")
            .await
            .unwrap();

        let generic = svc.generic_search_session_of(&review.id).await.unwrap();
        assert!(!generic.is_saved());
    }

    #[tokio::test]
    async fn deleting_source_leaves_generic_session_alone() {
        let svc = test_service().await;
        let (_, review) = test_review(&svc).await;
        let scopus = svc.create_source("Scopus", "", false).await.unwrap();
        let sourced = svc
            .create_search_session(&review.id, Some(&scopus.id), "TITLE-ABS(tdd)")
            .await
            .unwrap();
        let generic = svc
            .save_generic_search_session(&GenericSearchSession::Draft {
                review_id: review.id.clone(),
                search_string: "tdd".to_string(),
            })
            .await
            .unwrap();

        svc.delete_source(&scopus.id).await.unwrap();

        assert!(matches!(
            svc.get_search_session(&sourced.id).await,
            Err(DatabaseError::NoResult)
        ));
        let sessions = svc.search_sessions_of(&review.id).await.unwrap();
        assert_eq!(sessions, vec![generic.clone()]);
        assert_eq!(
            svc.generic_search_session_of(&review.id).await.unwrap(),
            GenericSearchSession::Saved(generic)
        );
    }

    #[tokio::test]
    async fn update_and_delete_session() {
        let svc = test_service().await;
        let (_, review) = test_review(&svc).await;
        let session = svc
            .create_search_session(&review.id, None, "tdd")
            .await
            .unwrap();

        let updated = svc
            .update_search_session(&session.id, "tdd OR bdd")
            .await
            .unwrap();
        assert_eq!(updated.search_string, "tdd OR bdd");

        svc.delete_search_session(&session.id).await.unwrap();
        assert!(svc.get_search_session(&session.id).await.is_err());
    }
}
