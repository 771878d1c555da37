//! Selection criteria repository.
//!
//! Descriptions pass through the service's description policy on every write.

use sift_core::entities::SelectionCriteria;
use sift_core::enums::CriteriaType;
use sift_core::ids::PREFIX_CRITERIA;

use crate::error::DatabaseError;
use crate::helpers::{SetClauses, require_affected};
use crate::service::ReviewService;
use crate::updates::criteria::CriteriaUpdate;

const SELECT_COLS: &str = "id, review_id, criteria_type, description";

fn row_to_criteria(row: &libsql::Row) -> Result<SelectionCriteria, DatabaseError> {
    Ok(SelectionCriteria {
        id: row.get(0)?,
        review_id: row.get(1)?,
        criteria_type: CriteriaType::from_code(&row.get::<String>(2)?)?,
        description: row.get(3)?,
    })
}

impl ReviewService {
    pub async fn create_criteria(
        &self,
        review_id: &str,
        criteria_type: CriteriaType,
        description: &str,
    ) -> Result<SelectionCriteria, DatabaseError> {
        let description = self.checked_description(description)?;
        let id = self.db().generate_id(PREFIX_CRITERIA).await?;

        self.db()
            .conn()
            .execute(
                &format!("INSERT INTO selection_criteria ({SELECT_COLS}) VALUES (?1, ?2, ?3, ?4)"),
                libsql::params![
                    id.as_str(),
                    review_id,
                    criteria_type.code(),
                    description.as_str()
                ],
            )
            .await?;

        Ok(SelectionCriteria {
            id,
            review_id: review_id.to_string(),
            criteria_type,
            description,
        })
    }

    pub async fn get_criteria(&self, id: &str) -> Result<SelectionCriteria, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM selection_criteria WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_criteria(&row)
    }

    pub async fn update_criteria(
        &self,
        criteria_id: &str,
        update: CriteriaUpdate,
    ) -> Result<SelectionCriteria, DatabaseError> {
        let mut sets = SetClauses::new();
        if let Some(criteria_type) = update.criteria_type {
            sets.push("criteria_type", criteria_type.code());
        }
        if let Some(description) = update.description {
            sets.push("description", self.checked_description(&description)?);
        }

        if sets.is_empty() {
            return self.get_criteria(criteria_id).await;
        }

        let (sql, params) = sets.into_update("selection_criteria", criteria_id);
        let affected = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        require_affected(affected)?;
        self.get_criteria(criteria_id).await
    }

    pub async fn delete_criteria(&self, id: &str) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute("DELETE FROM selection_criteria WHERE id = ?1", [id])
            .await?;
        require_affected(affected)
    }

    /// Inclusion criteria, ordered by description.
    pub async fn inclusion_criteria_of(
        &self,
        review_id: &str,
    ) -> Result<Vec<SelectionCriteria>, DatabaseError> {
        self.criteria_of_type(review_id, CriteriaType::Inclusion).await
    }

    /// Exclusion criteria, ordered by description.
    pub async fn exclusion_criteria_of(
        &self,
        review_id: &str,
    ) -> Result<Vec<SelectionCriteria>, DatabaseError> {
        self.criteria_of_type(review_id, CriteriaType::Exclusion).await
    }

    async fn criteria_of_type(
        &self,
        review_id: &str,
        criteria_type: CriteriaType,
    ) -> Result<Vec<SelectionCriteria>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM selection_criteria
                     WHERE review_id = ?1 AND criteria_type = ?2
                     ORDER BY description ASC"
                ),
                [review_id, criteria_type.code()],
            )
            .await?;

        let mut criteria = Vec::new();
        while let Some(row) = rows.next().await? {
            criteria.push(row_to_criteria(&row)?);
        }
        Ok(criteria)
    }
}
