//! Shared test utilities for sift-db unit tests.

#[cfg(test)]
pub(crate) mod helpers {
    use sift_core::entities::{Article, Review, User};

    use crate::repos::article::NewArticle;
    use crate::service::ReviewService;

    /// Create an in-memory ReviewService with default rules.
    pub async fn test_service() -> ReviewService {
        ReviewService::new_local(":memory:").await.unwrap()
    }

    /// Create a user with the given username.
    pub async fn test_user(svc: &ReviewService, username: &str) -> User {
        svc.create_user(username, None).await.unwrap()
    }

    /// Create a user and a review authored by them.
    pub async fn test_review(svc: &ReviewService) -> (User, Review) {
        let author = test_user(svc, "author").await;
        let review = svc
            .create_review(&author.id, "tdd-effects", "Effects of TDD", "", "")
            .await
            .unwrap();
        (author, review)
    }

    /// Create an untitled article in a review.
    pub async fn test_article(svc: &ReviewService, review_id: &str, title: &str) -> Article {
        svc.create_article(
            review_id,
            &NewArticle {
                title: title.to_string(),
                ..Default::default()
            },
        )
        .await
        .unwrap()
    }
}
