//! Data extraction repository: fields, lookup values of select fields, and
//! the values captured per article.

use sift_core::entities::{DataExtraction, DataExtractionField, DataExtractionLookup};
use sift_core::enums::FieldType;
use sift_core::ids::{PREFIX_DATA_EXTRACTION, PREFIX_EXTRACTION_FIELD, PREFIX_EXTRACTION_LOOKUP};

use crate::error::DatabaseError;
use crate::helpers::{
    SetClauses, format_datetime, get_opt_string, now, parse_datetime, require_affected,
};
use crate::service::ReviewService;
use crate::updates::extraction::ExtractionFieldUpdate;

const FIELD_COLS: &str = "id, review_id, description, field_type";
const LOOKUP_COLS: &str = "id, field_id, value";
const EXTRACTION_COLS: &str = "id, user_id, article_id, field_id, value, created_at";

fn row_to_field(row: &libsql::Row) -> Result<DataExtractionField, DatabaseError> {
    Ok(DataExtractionField {
        id: row.get(0)?,
        review_id: row.get(1)?,
        description: row.get(2)?,
        field_type: FieldType::from_code(&row.get::<String>(3)?)?,
    })
}

fn row_to_lookup(row: &libsql::Row) -> Result<DataExtractionLookup, DatabaseError> {
    Ok(DataExtractionLookup {
        id: row.get(0)?,
        field_id: row.get(1)?,
        value: row.get(2)?,
    })
}

/// Selections are loaded separately; see `selections_of`.
fn row_to_extraction(row: &libsql::Row) -> Result<DataExtraction, DatabaseError> {
    Ok(DataExtraction {
        id: row.get(0)?,
        user_id: get_opt_string(row, 1)?,
        article_id: row.get(2)?,
        field_id: row.get(3)?,
        value: row.get(4)?,
        select_values: Vec::new(),
        created_at: parse_datetime(&row.get::<String>(5)?)?,
    })
}

impl ReviewService {
    // -- fields --------------------------------------------------------------

    pub async fn create_extraction_field(
        &self,
        review_id: &str,
        description: &str,
        field_type: FieldType,
    ) -> Result<DataExtractionField, DatabaseError> {
        let id = self.db().generate_id(PREFIX_EXTRACTION_FIELD).await?;
        self.db()
            .conn()
            .execute(
                &format!("INSERT INTO extraction_fields ({FIELD_COLS}) VALUES (?1, ?2, ?3, ?4)"),
                [id.as_str(), review_id, description, field_type.code()],
            )
            .await?;

        Ok(DataExtractionField {
            id,
            review_id: review_id.to_string(),
            description: description.to_string(),
            field_type,
        })
    }

    pub async fn get_extraction_field(
        &self,
        id: &str,
    ) -> Result<DataExtractionField, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {FIELD_COLS} FROM extraction_fields WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_field(&row)
    }

    pub async fn update_extraction_field(
        &self,
        field_id: &str,
        update: ExtractionFieldUpdate,
    ) -> Result<DataExtractionField, DatabaseError> {
        let mut sets = SetClauses::new();
        if let Some(description) = update.description {
            sets.push("description", description);
        }
        if let Some(field_type) = update.field_type {
            let current = self.get_extraction_field(field_id).await?;
            if field_type != current.field_type {
                self.check_retype(&current, field_type).await?;
            }
            sets.push("field_type", field_type.code());
        }

        if sets.is_empty() {
            return self.get_extraction_field(field_id).await;
        }

        let (sql, params) = sets.into_update("extraction_fields", field_id);
        let affected = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        require_affected(affected)?;
        self.get_extraction_field(field_id).await
    }

    pub async fn delete_extraction_field(&self, id: &str) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute("DELETE FROM extraction_fields WHERE id = ?1", [id])
            .await?;
        require_affected(affected)
    }

    pub async fn data_extraction_fields_of(
        &self,
        review_id: &str,
    ) -> Result<Vec<DataExtractionField>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {FIELD_COLS} FROM extraction_fields WHERE review_id = ?1 ORDER BY rowid"
                ),
                [review_id],
            )
            .await?;

        let mut fields = Vec::new();
        while let Some(row) = rows.next().await? {
            fields.push(row_to_field(&row)?);
        }
        Ok(fields)
    }

    /// Whether the field takes its values from lookups.
    pub async fn is_select_field(&self, field_id: &str) -> Result<bool, DatabaseError> {
        Ok(self.get_extraction_field(field_id).await?.is_select_field())
    }

    // -- lookups -------------------------------------------------------------

    /// Add a permitted value to a select field.
    pub async fn create_extraction_lookup(
        &self,
        field_id: &str,
        value: &str,
    ) -> Result<DataExtractionLookup, DatabaseError> {
        let field = self.get_extraction_field(field_id).await?;
        if !field.is_select_field() {
            return Err(DatabaseError::Validation(format!(
                "field {field_id} is a {} field and takes no lookup values",
                field.field_type
            )));
        }
        let id = self.db().generate_id(PREFIX_EXTRACTION_LOOKUP).await?;
        self.db()
            .conn()
            .execute(
                &format!("INSERT INTO extraction_lookups ({LOOKUP_COLS}) VALUES (?1, ?2, ?3)"),
                [id.as_str(), field_id, value],
            )
            .await?;

        Ok(DataExtractionLookup {
            id,
            field_id: field_id.to_string(),
            value: value.to_string(),
        })
    }

    pub async fn get_extraction_lookup(
        &self,
        id: &str,
    ) -> Result<DataExtractionLookup, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {LOOKUP_COLS} FROM extraction_lookups WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_lookup(&row)
    }

    pub async fn update_extraction_lookup(
        &self,
        lookup_id: &str,
        value: &str,
    ) -> Result<DataExtractionLookup, DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute(
                "UPDATE extraction_lookups SET value = ?1 WHERE id = ?2",
                [value, lookup_id],
            )
            .await?;
        require_affected(affected)?;
        self.get_extraction_lookup(lookup_id).await
    }

    pub async fn delete_extraction_lookup(&self, id: &str) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute("DELETE FROM extraction_lookups WHERE id = ?1", [id])
            .await?;
        require_affected(affected)
    }

    /// Permitted values of a field, ordered by value.
    pub async fn select_values_of(
        &self,
        field_id: &str,
    ) -> Result<Vec<DataExtractionLookup>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {LOOKUP_COLS} FROM extraction_lookups
                     WHERE field_id = ?1
                     ORDER BY value ASC"
                ),
                [field_id],
            )
            .await?;

        let mut lookups = Vec::new();
        while let Some(row) = rows.next().await? {
            lookups.push(row_to_lookup(&row)?);
        }
        Ok(lookups)
    }

    // -- extractions ---------------------------------------------------------

    /// Capture a value of `field_id` for an article.
    ///
    /// `lookup_ids` are the chosen values of a select field and must belong
    /// to that field. Select-one fields accept at most one.
    pub async fn record_data_extraction(
        &self,
        user_id: &str,
        article_id: &str,
        field_id: &str,
        value: &str,
        lookup_ids: &[&str],
    ) -> Result<DataExtraction, DatabaseError> {
        let article = self.get_article(article_id).await?;
        let field = self.get_extraction_field(field_id).await?;
        if field.review_id != article.review_id {
            return Err(DatabaseError::Validation(format!(
                "extraction field {field_id} belongs to another review"
            )));
        }
        self.check_selection(&field, lookup_ids).await?;

        let created_at = now();
        let id = self.db().generate_id(PREFIX_DATA_EXTRACTION).await?;

        let tx = self.db().conn().transaction().await?;
        tx.execute(
            &format!(
                "INSERT INTO data_extractions ({EXTRACTION_COLS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6)"
            ),
            libsql::params![
                id.as_str(),
                user_id,
                article_id,
                field_id,
                value,
                format_datetime(&created_at)
            ],
        )
        .await?;
        for lookup_id in lookup_ids {
            tx.execute(
                "INSERT OR IGNORE INTO data_extraction_selections (extraction_id, lookup_id)
                 VALUES (?1, ?2)",
                [id.as_str(), *lookup_id],
            )
            .await?;
        }
        tx.commit().await?;

        self.get_data_extraction(&id).await
    }

    pub async fn get_data_extraction(&self, id: &str) -> Result<DataExtraction, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {EXTRACTION_COLS} FROM data_extractions WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let mut extraction = row_to_extraction(&row)?;
        extraction.select_values = self.selections_of(id).await?;
        Ok(extraction)
    }

    pub async fn update_data_extraction_value(
        &self,
        extraction_id: &str,
        value: &str,
    ) -> Result<DataExtraction, DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute(
                "UPDATE data_extractions SET value = ?1 WHERE id = ?2",
                [value, extraction_id],
            )
            .await?;
        require_affected(affected)?;
        self.get_data_extraction(extraction_id).await
    }

    /// Replace the chosen lookup values of an extraction.
    pub async fn set_extraction_select_values(
        &self,
        extraction_id: &str,
        lookup_ids: &[&str],
    ) -> Result<DataExtraction, DatabaseError> {
        let extraction = self.get_data_extraction(extraction_id).await?;
        let field = self.get_extraction_field(&extraction.field_id).await?;
        self.check_selection(&field, lookup_ids).await?;

        let tx = self.db().conn().transaction().await?;
        tx.execute(
            "DELETE FROM data_extraction_selections WHERE extraction_id = ?1",
            [extraction_id],
        )
        .await?;
        for lookup_id in lookup_ids {
            tx.execute(
                "INSERT OR IGNORE INTO data_extraction_selections (extraction_id, lookup_id)
                 VALUES (?1, ?2)",
                [extraction_id, *lookup_id],
            )
            .await?;
        }
        tx.commit().await?;

        self.get_data_extraction(extraction_id).await
    }

    pub async fn delete_data_extraction(&self, id: &str) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute("DELETE FROM data_extractions WHERE id = ?1", [id])
            .await?;
        require_affected(affected)
    }

    /// Everything extracted from an article, in recording order.
    pub async fn data_extractions_of(
        &self,
        article_id: &str,
    ) -> Result<Vec<DataExtraction>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {EXTRACTION_COLS} FROM data_extractions
                     WHERE article_id = ?1
                     ORDER BY rowid"
                ),
                [article_id],
            )
            .await?;

        let mut extractions = Vec::new();
        while let Some(row) = rows.next().await? {
            extractions.push(row_to_extraction(&row)?);
        }
        for extraction in &mut extractions {
            extraction.select_values = self.selections_of(&extraction.id).await?;
        }
        Ok(extractions)
    }

    /// Chosen lookup IDs of an extraction, ordered by lookup value.
    async fn selections_of(&self, extraction_id: &str) -> Result<Vec<String>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT s.lookup_id
                 FROM data_extraction_selections s
                 JOIN extraction_lookups l ON l.id = s.lookup_id
                 WHERE s.extraction_id = ?1
                 ORDER BY l.value ASC",
                [extraction_id],
            )
            .await?;

        let mut ids = Vec::new();
        while let Some(row) = rows.next().await? {
            ids.push(row.get::<String>(0)?);
        }
        Ok(ids)
    }

    /// A field keeps the lookups and selections it already has, so its new
    /// type must still accept them: values ask for a select type, and a choice
    /// of several values asks for `SelectMany`.
    async fn check_retype(
        &self,
        field: &DataExtractionField,
        new_type: FieldType,
    ) -> Result<(), DatabaseError> {
        if !new_type.is_select() {
            let lookups = self
                .count(
                    "SELECT COUNT(*) FROM extraction_lookups WHERE field_id = ?1",
                    &field.id,
                )
                .await?;
            if lookups > 0 {
                return Err(DatabaseError::Validation(format!(
                    "field {} has {lookups} lookup value(s) and must stay a select field",
                    field.id
                )));
            }
        }
        if new_type == FieldType::SelectOne {
            let crowded = self
                .count(
                    "SELECT COUNT(*) FROM (
                         SELECT s.extraction_id
                         FROM data_extraction_selections s
                         JOIN data_extractions d ON d.id = s.extraction_id
                         WHERE d.field_id = ?1
                         GROUP BY s.extraction_id
                         HAVING COUNT(*) > 1
                     )",
                    &field.id,
                )
                .await?;
            if crowded > 0 {
                return Err(DatabaseError::Validation(format!(
                    "field {} has {crowded} extraction(s) with several values selected",
                    field.id
                )));
            }
        }
        Ok(())
    }

    async fn count(&self, sql: &str, id: &str) -> Result<i64, DatabaseError> {
        let mut rows = self.db().conn().query(sql, [id]).await?;
        match rows.next().await? {
            Some(row) => Ok(row.get::<i64>(0)?),
            None => Ok(0),
        }
    }

    async fn check_selection(
        &self,
        field: &DataExtractionField,
        lookup_ids: &[&str],
    ) -> Result<(), DatabaseError> {
        if lookup_ids.is_empty() {
            return Ok(());
        }
        if !field.is_select_field() {
            return Err(DatabaseError::Validation(format!(
                "field {} is a {} field and takes no lookup values",
                field.id, field.field_type
            )));
        }
        if field.field_type == FieldType::SelectOne && lookup_ids.len() > 1 {
            return Err(DatabaseError::Validation(format!(
                "field {} accepts a single value, got {}",
                field.id,
                lookup_ids.len()
            )));
        }
        let permitted = self.select_values_of(&field.id).await?;
        for lookup_id in lookup_ids {
            if !permitted.iter().any(|l| l.id == *lookup_id) {
                return Err(DatabaseError::Validation(format!(
                    "lookup {lookup_id} is not a value of field {}",
                    field.id
                )));
            }
        }
        Ok(())
    }
}
