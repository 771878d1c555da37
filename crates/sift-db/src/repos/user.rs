//! User repository: the reference rows reviews point at.

use sift_core::entities::User;
use sift_core::ids::PREFIX_USER;

use crate::error::DatabaseError;
use crate::helpers::{format_datetime, get_opt_string, now, parse_datetime, require_affected};
use crate::service::ReviewService;

const SELECT_COLS: &str = "id, username, email, created_at";

pub(crate) fn row_to_user(row: &libsql::Row) -> Result<User, DatabaseError> {
    Ok(User {
        id: row.get(0)?,
        username: row.get(1)?,
        email: get_opt_string(row, 2)?,
        created_at: parse_datetime(&row.get::<String>(3)?)?,
    })
}

impl ReviewService {
    pub async fn create_user(
        &self,
        username: &str,
        email: Option<&str>,
    ) -> Result<User, DatabaseError> {
        if username.trim().is_empty() {
            return Err(DatabaseError::Validation("username must not be empty".into()));
        }
        let created_at = now();
        let id = self.db().generate_id(PREFIX_USER).await?;

        self.db()
            .conn()
            .execute(
                &format!("INSERT INTO users ({SELECT_COLS}) VALUES (?1, ?2, ?3, ?4)"),
                libsql::params![id.as_str(), username, email, format_datetime(&created_at)],
            )
            .await?;

        Ok(User {
            id,
            username: username.to_string(),
            email: email.map(String::from),
            created_at,
        })
    }

    pub async fn get_user(&self, id: &str) -> Result<User, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM users WHERE id = ?1"), [id])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_user(&row)
    }

    pub async fn get_user_by_username(&self, username: &str) -> Result<User, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM users WHERE username = ?1"),
                [username],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_user(&row)
    }

    pub async fn list_users(&self, limit: u32) -> Result<Vec<User>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM users ORDER BY username LIMIT {limit}"),
                (),
            )
            .await?;

        let mut users = Vec::new();
        while let Some(row) = rows.next().await? {
            users.push(row_to_user(&row)?);
        }
        Ok(users)
    }

    /// Delete a user. Fails while the user still authors a review.
    pub async fn delete_user(&self, id: &str) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute("DELETE FROM users WHERE id = ?1", [id])
            .await?;
        require_affected(affected)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::DatabaseError;
    use crate::test_support::helpers::{test_review, test_service, test_user};

    #[tokio::test]
    async fn create_user_roundtrip() {
        let svc = test_service().await;
        let user = svc
            .create_user("ada", Some("ada@example.org"))
            .await
            .unwrap();

        assert!(user.id.starts_with("usr-"));
        let fetched = svc.get_user(&user.id).await.unwrap();
        assert_eq!(fetched, user);

        let by_name = svc.get_user_by_username("ada").await.unwrap();
        assert_eq!(by_name.id, user.id);
    }

    #[tokio::test]
    async fn duplicate_username_rejected() {
        let svc = test_service().await;
        test_user(&svc, "ada").await;
        assert!(svc.create_user("ada", None).await.is_err());
    }

    #[tokio::test]
    async fn empty_username_rejected() {
        let svc = test_service().await;
        let err = svc.create_user("  ", None).await.unwrap_err();
        assert!(matches!(err, DatabaseError::Validation(_)));
    }

    #[tokio::test]
    async fn missing_user_is_no_result() {
        let svc = test_service().await;
        let err = svc.get_user("usr-00000000").await.unwrap_err();
        assert!(matches!(err, DatabaseError::NoResult));
    }

    #[tokio::test]
    async fn list_users_ordered_by_username() {
        let svc = test_service().await;
        test_user(&svc, "zoe").await;
        test_user(&svc, "ada").await;

        let names: Vec<String> = svc
            .list_users(10)
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.username)
            .collect();
        assert_eq!(names, ["ada", "zoe"]);
    }

    #[tokio::test]
    async fn author_cannot_be_deleted() {
        let svc = test_service().await;
        let (author, _review) = test_review(&svc).await;
        assert!(svc.delete_user(&author.id).await.is_err());
        assert!(svc.get_user(&author.id).await.is_ok());
    }

    #[tokio::test]
    async fn delete_user_removes_row() {
        let svc = test_service().await;
        let user = test_user(&svc, "ada").await;
        svc.delete_user(&user.id).await.unwrap();
        assert!(matches!(
            svc.get_user(&user.id).await,
            Err(DatabaseError::NoResult)
        ));
        assert!(matches!(
            svc.delete_user(&user.id).await,
            Err(DatabaseError::NoResult)
        ));
    }
}
