//! Review repository: the root aggregate, its co-authors and attached sources.
//!
//! Every save stamps `last_update`. The stamp never moves backwards, even if
//! the wall clock does.

use chrono::{DateTime, Utc};

use sift_core::entities::{Review, Source, User};
use sift_core::enums::{ReviewStatus, Strategy};
use sift_core::ids::PREFIX_REVIEW;
use sift_core::rules::validate_slug;

use crate::error::{DatabaseError, rule_violation};
use crate::helpers::{SetClauses, format_datetime, now, parse_datetime, require_affected};
use crate::repos::source::row_to_source;
use crate::repos::user::row_to_user;
use crate::service::ReviewService;
use crate::updates::review::ReviewUpdate;

const SELECT_COLS: &str = "id, name, title, description, objective, author_id, status, \
     study_selection_strategy, quality_assessment_strategy, data_extraction_strategy, \
     quality_assessment_cutoff_score, created_at, last_update";

fn row_to_review(row: &libsql::Row) -> Result<Review, DatabaseError> {
    Ok(Review {
        id: row.get(0)?,
        name: row.get(1)?,
        title: row.get(2)?,
        description: row.get(3)?,
        objective: row.get(4)?,
        author_id: row.get(5)?,
        status: ReviewStatus::from_code(&row.get::<String>(6)?)?,
        study_selection_strategy: Strategy::from_code(&row.get::<String>(7)?)?,
        quality_assessment_strategy: Strategy::from_code(&row.get::<String>(8)?)?,
        data_extraction_strategy: Strategy::from_code(&row.get::<String>(9)?)?,
        quality_assessment_cutoff_score: row.get(10)?,
        created_at: parse_datetime(&row.get::<String>(11)?)?,
        last_update: parse_datetime(&row.get::<String>(12)?)?,
    })
}

/// Next `last_update` value: now, or the previous stamp if the clock is behind it.
fn next_stamp(previous: DateTime<Utc>) -> DateTime<Utc> {
    now().max(previous)
}

impl ReviewService {
    pub async fn create_review(
        &self,
        author_id: &str,
        name: &str,
        title: &str,
        description: &str,
        objective: &str,
    ) -> Result<Review, DatabaseError> {
        validate_slug(name).map_err(rule_violation)?;
        let stamp = now();
        let id = self.db().generate_id(PREFIX_REVIEW).await?;

        let review = Review {
            id,
            name: name.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            objective: objective.to_string(),
            author_id: author_id.to_string(),
            status: ReviewStatus::default(),
            study_selection_strategy: Strategy::default(),
            quality_assessment_strategy: Strategy::default(),
            data_extraction_strategy: Strategy::default(),
            quality_assessment_cutoff_score: 0.0,
            created_at: stamp,
            last_update: stamp,
        };

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO reviews ({SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)"
                ),
                libsql::params![
                    review.id.as_str(),
                    name,
                    title,
                    description,
                    objective,
                    author_id,
                    review.status.code(),
                    review.study_selection_strategy.code(),
                    review.quality_assessment_strategy.code(),
                    review.data_extraction_strategy.code(),
                    review.quality_assessment_cutoff_score,
                    format_datetime(&stamp),
                    format_datetime(&stamp)
                ],
            )
            .await?;

        Ok(review)
    }

    pub async fn get_review(&self, id: &str) -> Result<Review, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM reviews WHERE id = ?1"), [id])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_review(&row)
    }

    /// Look a review up by its author and slug.
    pub async fn get_review_by_name(
        &self,
        author_id: &str,
        name: &str,
    ) -> Result<Review, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM reviews WHERE author_id = ?1 AND name = ?2"),
                [author_id, name],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_review(&row)
    }

    /// Most recently updated reviews first.
    pub async fn list_reviews(&self, limit: u32) -> Result<Vec<Review>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM reviews ORDER BY last_update DESC LIMIT {limit}"
                ),
                (),
            )
            .await?;

        let mut reviews = Vec::new();
        while let Some(row) = rows.next().await? {
            reviews.push(row_to_review(&row)?);
        }
        Ok(reviews)
    }

    /// Reviews `user_id` authors or co-authors, most recently updated first.
    pub async fn reviews_for_user(&self, user_id: &str) -> Result<Vec<Review>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM reviews
                     WHERE author_id = ?1
                        OR id IN (SELECT review_id FROM review_co_authors WHERE user_id = ?1)
                     ORDER BY last_update DESC"
                ),
                [user_id],
            )
            .await?;

        let mut reviews = Vec::new();
        while let Some(row) = rows.next().await? {
            reviews.push(row_to_review(&row)?);
        }
        Ok(reviews)
    }

    /// Apply a partial update. Always stamps `last_update`, even when no
    /// field is set.
    pub async fn update_review(
        &self,
        review_id: &str,
        update: ReviewUpdate,
    ) -> Result<Review, DatabaseError> {
        let current = self.get_review(review_id).await?;

        let mut sets = SetClauses::new();
        if let Some(name) = update.name {
            validate_slug(&name).map_err(rule_violation)?;
            sets.push("name", name);
        }
        if let Some(title) = update.title {
            sets.push("title", title);
        }
        if let Some(description) = update.description {
            sets.push("description", description);
        }
        if let Some(objective) = update.objective {
            sets.push("objective", objective);
        }
        if let Some(status) = update.status {
            sets.push("status", status.code());
        }
        if let Some(strategy) = update.study_selection_strategy {
            sets.push("study_selection_strategy", strategy.code());
        }
        if let Some(strategy) = update.quality_assessment_strategy {
            sets.push("quality_assessment_strategy", strategy.code());
        }
        if let Some(strategy) = update.data_extraction_strategy {
            sets.push("data_extraction_strategy", strategy.code());
        }
        if let Some(score) = update.quality_assessment_cutoff_score {
            sets.push("quality_assessment_cutoff_score", score);
        }
        sets.push(
            "last_update",
            format_datetime(&next_stamp(current.last_update)),
        );

        let (sql, params) = sets.into_update("reviews", review_id);
        self.db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        self.get_review(review_id).await
    }

    /// Write every mutable field of `review` back to the store.
    ///
    /// `created_at` and `last_update` on the value are ignored: the former is
    /// fixed at creation, the latter is stamped here.
    pub async fn save_review(&self, review: &Review) -> Result<Review, DatabaseError> {
        validate_slug(&review.name).map_err(rule_violation)?;
        let current = self.get_review(&review.id).await?;
        let stamp = next_stamp(current.last_update);

        self.db()
            .conn()
            .execute(
                "UPDATE reviews SET name = ?1, title = ?2, description = ?3, objective = ?4,
                     author_id = ?5, status = ?6, study_selection_strategy = ?7,
                     quality_assessment_strategy = ?8, data_extraction_strategy = ?9,
                     quality_assessment_cutoff_score = ?10, last_update = ?11
                 WHERE id = ?12",
                libsql::params![
                    review.name.as_str(),
                    review.title.as_str(),
                    review.description.as_str(),
                    review.objective.as_str(),
                    review.author_id.as_str(),
                    review.status.code(),
                    review.study_selection_strategy.code(),
                    review.quality_assessment_strategy.code(),
                    review.data_extraction_strategy.code(),
                    review.quality_assessment_cutoff_score,
                    format_datetime(&stamp),
                    review.id.as_str()
                ],
            )
            .await?;
        self.get_review(&review.id).await
    }

    /// Delete a review and everything it owns.
    pub async fn delete_review(&self, id: &str) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute("DELETE FROM reviews WHERE id = ?1", [id])
            .await?;
        require_affected(affected)
    }

    // -- co-authors ----------------------------------------------------------

    pub async fn add_co_author(&self, review_id: &str, user_id: &str) -> Result<(), DatabaseError> {
        let review = self.get_review(review_id).await?;
        if review.author_id == user_id {
            return Err(DatabaseError::Validation(format!(
                "user {user_id} already authors review {review_id}"
            )));
        }
        self.db()
            .conn()
            .execute(
                "INSERT OR IGNORE INTO review_co_authors (review_id, user_id) VALUES (?1, ?2)",
                [review_id, user_id],
            )
            .await?;
        Ok(())
    }

    pub async fn remove_co_author(
        &self,
        review_id: &str,
        user_id: &str,
    ) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute(
                "DELETE FROM review_co_authors WHERE review_id = ?1 AND user_id = ?2",
                [review_id, user_id],
            )
            .await?;
        require_affected(affected)
    }

    pub async fn co_authors_of(&self, review_id: &str) -> Result<Vec<User>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT u.id, u.username, u.email, u.created_at
                 FROM users u
                 JOIN review_co_authors c ON c.user_id = u.id
                 WHERE c.review_id = ?1
                 ORDER BY u.username",
                [review_id],
            )
            .await?;

        let mut users = Vec::new();
        while let Some(row) = rows.next().await? {
            users.push(row_to_user(&row)?);
        }
        Ok(users)
    }

    /// Whether `user_id` authors or co-authors the review.
    pub async fn is_author_or_coauthor(
        &self,
        review_id: &str,
        user_id: &str,
    ) -> Result<bool, DatabaseError> {
        let review = self.get_review(review_id).await?;
        let co_authors = self.co_authors_of(review_id).await?;
        Ok(review.is_author_or_coauthor(user_id, co_authors.iter().map(|u| u.id.as_str())))
    }

    // -- sources -------------------------------------------------------------

    pub async fn add_review_source(
        &self,
        review_id: &str,
        source_id: &str,
    ) -> Result<(), DatabaseError> {
        self.db()
            .conn()
            .execute(
                "INSERT OR IGNORE INTO review_sources (review_id, source_id) VALUES (?1, ?2)",
                [review_id, source_id],
            )
            .await?;
        Ok(())
    }

    pub async fn remove_review_source(
        &self,
        review_id: &str,
        source_id: &str,
    ) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute(
                "DELETE FROM review_sources WHERE review_id = ?1 AND source_id = ?2",
                [review_id, source_id],
            )
            .await?;
        require_affected(affected)
    }

    /// Sources attached to a review, ordered by name.
    pub async fn sources_of(&self, review_id: &str) -> Result<Vec<Source>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT s.id, s.name, s.url, s.is_default
                 FROM sources s
                 JOIN review_sources rs ON rs.source_id = s.id
                 WHERE rs.review_id = ?1
                 ORDER BY s.name",
                [review_id],
            )
            .await?;

        let mut sources = Vec::new();
        while let Some(row) = rows.next().await? {
            sources.push(row_to_source(&row)?);
        }
        Ok(sources)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use pretty_assertions::assert_eq;

    use super::next_stamp;
    use crate::error::DatabaseError;
    use crate::helpers::now;
    use crate::test_support::helpers::{test_review, test_service, test_user};
    use crate::updates::review::ReviewUpdateBuilder;
    use sift_core::enums::{ReviewStatus, Strategy};

    #[tokio::test]
    async fn create_review_roundtrip() {
        let svc = test_service().await;
        let (author, review) = test_review(&svc).await;

        assert!(review.id.starts_with("rev-"));
        assert_eq!(review.author_id, author.id);
        assert_eq!(review.status, ReviewStatus::Unpublished);
        assert_eq!(review.created_at, review.last_update);

        let fetched = svc.get_review(&review.id).await.unwrap();
        assert_eq!(fetched, review);

        let by_name = svc.get_review_by_name(&author.id, "tdd-effects").await.unwrap();
        assert_eq!(by_name.id, review.id);
    }

    #[tokio::test]
    async fn non_slug_name_rejected() {
        let svc = test_service().await;
        let author = test_user(&svc, "author").await;
        let err = svc
            .create_review(&author.id, "Not A Slug", "Title", "", "")
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::Validation(_)));
    }

    #[tokio::test]
    async fn same_name_twice_per_author_rejected() {
        let svc = test_service().await;
        let (author, _) = test_review(&svc).await;
        assert!(svc
            .create_review(&author.id, "tdd-effects", "Again", "", "")
            .await
            .is_err());
    }

    #[tokio::test]
    async fn update_review_partial_and_stamps() {
        let svc = test_service().await;
        let (_, review) = test_review(&svc).await;

        let update = ReviewUpdateBuilder::new()
            .title("TDD and defects")
            .status(ReviewStatus::Published)
            .quality_assessment_strategy(Strategy::MultipleForms)
            .quality_assessment_cutoff_score(2.5)
            .build();
        let updated = svc.update_review(&review.id, update).await.unwrap();

        assert_eq!(updated.title, "TDD and defects");
        assert_eq!(updated.name, review.name);
        assert_eq!(updated.status, ReviewStatus::Published);
        assert_eq!(updated.quality_assessment_strategy, Strategy::MultipleForms);
        assert_eq!(updated.study_selection_strategy, Strategy::SingleForm);
        assert!((updated.quality_assessment_cutoff_score - 2.5).abs() < f64::EPSILON);
        assert_eq!(updated.created_at, review.created_at);
        assert!(updated.last_update >= review.last_update);
    }

    #[tokio::test]
    async fn last_update_never_decreases_across_saves() {
        let svc = test_service().await;
        let (_, review) = test_review(&svc).await;

        let mut previous = review.last_update;
        let mut current = review;
        for i in 0..5 {
            current.title = format!("Revision {i}");
            current = svc.save_review(&current).await.unwrap();
            assert!(current.last_update >= previous);
            previous = current.last_update;
        }
    }

    #[tokio::test]
    async fn save_review_ignores_caller_timestamps() {
        let svc = test_service().await;
        let (_, review) = test_review(&svc).await;

        let mut stale = review.clone();
        stale.last_update = review.last_update - Duration::days(30);
        stale.created_at = review.created_at - Duration::days(30);
        let saved = svc.save_review(&stale).await.unwrap();

        assert!(saved.last_update >= review.last_update);
        assert_eq!(saved.created_at, review.created_at);
    }

    #[test]
    fn stamp_holds_when_clock_is_behind() {
        let future = now() + Duration::hours(1);
        assert_eq!(next_stamp(future), future);
        let past = now() - Duration::hours(1);
        assert!(next_stamp(past) > past);
    }

    #[tokio::test]
    async fn co_author_membership() {
        let svc = test_service().await;
        let (author, review) = test_review(&svc).await;
        let co1 = test_user(&svc, "bea").await;
        let co2 = test_user(&svc, "cal").await;
        let outsider = test_user(&svc, "dan").await;

        svc.add_co_author(&review.id, &co1.id).await.unwrap();
        svc.add_co_author(&review.id, &co2.id).await.unwrap();
        svc.add_co_author(&review.id, &co2.id).await.unwrap();

        let names: Vec<String> = svc
            .co_authors_of(&review.id)
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.username)
            .collect();
        assert_eq!(names, ["bea", "cal"]);

        assert!(svc.is_author_or_coauthor(&review.id, &author.id).await.unwrap());
        assert!(svc.is_author_or_coauthor(&review.id, &co2.id).await.unwrap());
        assert!(!svc.is_author_or_coauthor(&review.id, &outsider.id).await.unwrap());

        svc.remove_co_author(&review.id, &co2.id).await.unwrap();
        assert!(!svc.is_author_or_coauthor(&review.id, &co2.id).await.unwrap());
    }

    #[tokio::test]
    async fn author_cannot_be_co_author() {
        let svc = test_service().await;
        let (author, review) = test_review(&svc).await;
        let err = svc.add_co_author(&review.id, &author.id).await.unwrap_err();
        assert!(matches!(err, DatabaseError::Validation(_)));
    }

    #[tokio::test]
    async fn reviews_for_user_includes_co_authored() {
        let svc = test_service().await;
        let (author, review) = test_review(&svc).await;
        let co = test_user(&svc, "bea").await;
        let own = svc
            .create_review(&co.id, "own-review", "Own", "", "")
            .await
            .unwrap();
        svc.add_co_author(&review.id, &co.id).await.unwrap();

        let mut ids: Vec<String> = svc
            .reviews_for_user(&co.id)
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect();
        ids.sort();
        let mut expected = vec![review.id.clone(), own.id];
        expected.sort();
        assert_eq!(ids, expected);

        assert_eq!(svc.reviews_for_user(&author.id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn review_sources_attach_and_detach() {
        let svc = test_service().await;
        let (_, review) = test_review(&svc).await;
        let scopus = svc.create_source("Scopus", "", false).await.unwrap();
        let acm = svc.create_source("ACM", "", false).await.unwrap();

        svc.add_review_source(&review.id, &scopus.id).await.unwrap();
        svc.add_review_source(&review.id, &acm.id).await.unwrap();
        let names: Vec<String> = svc
            .sources_of(&review.id)
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, ["ACM", "Scopus"]);

        svc.remove_review_source(&review.id, &acm.id).await.unwrap();
        assert_eq!(svc.sources_of(&review.id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn list_reviews_most_recent_first() {
        let svc = test_service().await;
        let (author, first) = test_review(&svc).await;
        let second = svc
            .create_review(&author.id, "second", "Second", "", "")
            .await
            .unwrap();
        svc.update_review(&first.id, ReviewUpdateBuilder::new().title("Touched").build())
            .await
            .unwrap();

        let reviews = svc.list_reviews(10).await.unwrap();
        assert_eq!(reviews.len(), 2);
        assert!(reviews[0].last_update >= reviews[1].last_update);
        assert!(reviews.iter().any(|r| r.id == second.id));
    }

    #[tokio::test]
    async fn delete_review_missing_is_no_result() {
        let svc = test_service().await;
        assert!(matches!(
            svc.delete_review("rev-00000000").await,
            Err(DatabaseError::NoResult)
        ));
    }
}
