//! PostgreSQL implementation of DealRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::column;
use crate::domain::crm::Deal;
use crate::domain::foundation::{ContactId, DealId, DomainError, ErrorCode, Timestamp};
use crate::ports::DealRepository;

/// PostgreSQL implementation of DealRepository.
#[derive(Clone)]
pub struct PostgresDealRepository {
    pool: PgPool,
}

impl PostgresDealRepository {
    /// Creates a new PostgresDealRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DealRepository for PostgresDealRepository {
    async fn insert(&self, deal: &Deal) -> Result<(), DomainError> {
        // Existence check and insert share a transaction so the reference
        // cannot vanish in between.
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::store(format!("Failed to begin insert: {}", e)))?;

        let contact_exists: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM contacts WHERE id = $1)")
                .bind(deal.contact_id.as_uuid())
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| DomainError::store(format!("Failed to check contact: {}", e)))?;

        if !contact_exists.0 {
            return Err(DomainError::new(
                ErrorCode::ReferenceNotFound,
                format!("Deal references unknown contact: {}", deal.contact_id),
            ));
        }

        sqlx::query(
            r#"
            INSERT INTO deals (
                id, contact_id, title, value, currency, stage,
                probability, expected_close, notes, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(deal.id.as_uuid())
        .bind(deal.contact_id.as_uuid())
        .bind(&deal.title)
        .bind(deal.value)
        .bind(&deal.currency)
        .bind(&deal.stage)
        .bind(deal.probability)
        .bind(deal.expected_close)
        .bind(&deal.notes)
        .bind(deal.created_at.as_datetime())
        .bind(deal.updated_at.as_datetime())
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::store(format!("Failed to insert deal: {}", e)))?;

        tx.commit()
            .await
            .map_err(|e| DomainError::store(format!("Failed to commit insert: {}", e)))?;

        Ok(())
    }

    async fn update(&self, deal: &Deal) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE deals SET
                title = $2,
                value = $3,
                currency = $4,
                stage = $5,
                probability = $6,
                expected_close = $7,
                notes = $8,
                updated_at = $9
            WHERE id = $1
            "#,
        )
        .bind(deal.id.as_uuid())
        .bind(&deal.title)
        .bind(deal.value)
        .bind(&deal.currency)
        .bind(&deal.stage)
        .bind(deal.probability)
        .bind(deal.expected_close)
        .bind(&deal.notes)
        .bind(deal.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::store(format!("Failed to update deal: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::DealNotFound,
                format!("Deal not found: {}", deal.id),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &DealId) -> Result<Option<Deal>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, contact_id, title, value, currency, stage,
                   probability, expected_close, notes, created_at, updated_at
            FROM deals WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::store(format!("Failed to fetch deal: {}", e)))?;

        row.map(row_to_deal).transpose()
    }

    async fn list(&self) -> Result<Vec<Deal>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, contact_id, title, value, currency, stage,
                   probability, expected_close, notes, created_at, updated_at
            FROM deals ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::store(format!("Failed to list deals: {}", e)))?;

        rows.into_iter().map(row_to_deal).collect()
    }

    async fn find_by_contact_id(&self, contact_id: &ContactId) -> Result<Vec<Deal>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, contact_id, title, value, currency, stage,
                   probability, expected_close, notes, created_at, updated_at
            FROM deals WHERE contact_id = $1 ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(contact_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::store(format!("Failed to list deals by contact: {}", e)))?;

        rows.into_iter().map(row_to_deal).collect()
    }

    async fn delete(&self, id: &DealId) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::store(format!("Failed to begin cascade: {}", e)))?;

        sqlx::query("DELETE FROM activities WHERE deal_id = $1")
            .bind(id.as_uuid())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::store(format!("Failed to cascade activities: {}", e)))?;

        let result = sqlx::query("DELETE FROM deals WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::store(format!("Failed to delete deal: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::DealNotFound,
                format!("Deal not found: {}", id),
            ));
        }

        tx.commit()
            .await
            .map_err(|e| DomainError::store(format!("Failed to commit cascade: {}", e)))?;

        Ok(())
    }
}

fn row_to_deal(row: PgRow) -> Result<Deal, DomainError> {
    let id: uuid::Uuid = column(&row, "id")?;
    let contact_id: uuid::Uuid = column(&row, "contact_id")?;
    let created_at: chrono::DateTime<chrono::Utc> = column(&row, "created_at")?;
    let updated_at: chrono::DateTime<chrono::Utc> = column(&row, "updated_at")?;

    Ok(Deal {
        id: DealId::from_uuid(id),
        contact_id: ContactId::from_uuid(contact_id),
        title: column(&row, "title")?,
        value: column(&row, "value")?,
        currency: column(&row, "currency")?,
        stage: column(&row, "stage")?,
        probability: column(&row, "probability")?,
        expected_close: column(&row, "expected_close")?,
        notes: column(&row, "notes")?,
        created_at: Timestamp::from_datetime(created_at),
        updated_at: Timestamp::from_datetime(updated_at),
    })
}
