//! PostgreSQL implementation of ActivityRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::column;
use crate::domain::crm::Activity;
use crate::domain::foundation::{ActivityId, ContactId, DealId, DomainError, ErrorCode, Timestamp};
use crate::ports::ActivityRepository;

/// PostgreSQL implementation of ActivityRepository.
#[derive(Clone)]
pub struct PostgresActivityRepository {
    pool: PgPool,
}

impl PostgresActivityRepository {
    /// Creates a new PostgresActivityRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActivityRepository for PostgresActivityRepository {
    async fn insert(&self, activity: &Activity) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::store(format!("Failed to begin insert: {}", e)))?;

        let contact_exists: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM contacts WHERE id = $1)")
                .bind(activity.contact_id.as_uuid())
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| DomainError::store(format!("Failed to check contact: {}", e)))?;

        if !contact_exists.0 {
            return Err(DomainError::new(
                ErrorCode::ReferenceNotFound,
                format!("Activity references unknown contact: {}", activity.contact_id),
            ));
        }

        if let Some(deal_id) = activity.deal_id {
            let deal_exists: (bool,) =
                sqlx::query_as("SELECT EXISTS(SELECT 1 FROM deals WHERE id = $1)")
                    .bind(deal_id.as_uuid())
                    .fetch_one(&mut *tx)
                    .await
                    .map_err(|e| DomainError::store(format!("Failed to check deal: {}", e)))?;

            if !deal_exists.0 {
                return Err(DomainError::new(
                    ErrorCode::ReferenceNotFound,
                    format!("Activity references unknown deal: {}", deal_id),
                ));
            }
        }

        sqlx::query(
            r#"
            INSERT INTO activities (
                id, contact_id, deal_id, kind, subject,
                description, date, completed, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(activity.id.as_uuid())
        .bind(activity.contact_id.as_uuid())
        .bind(activity.deal_id.map(|d| *d.as_uuid()))
        .bind(&activity.kind)
        .bind(&activity.subject)
        .bind(&activity.description)
        .bind(activity.date.as_datetime())
        .bind(activity.completed)
        .bind(activity.created_at.as_datetime())
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::store(format!("Failed to insert activity: {}", e)))?;

        tx.commit()
            .await
            .map_err(|e| DomainError::store(format!("Failed to commit insert: {}", e)))?;

        Ok(())
    }

    async fn update(&self, activity: &Activity) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE activities SET
                kind = $2,
                subject = $3,
                description = $4,
                date = $5,
                completed = $6
            WHERE id = $1
            "#,
        )
        .bind(activity.id.as_uuid())
        .bind(&activity.kind)
        .bind(&activity.subject)
        .bind(&activity.description)
        .bind(activity.date.as_datetime())
        .bind(activity.completed)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::store(format!("Failed to update activity: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::ActivityNotFound,
                format!("Activity not found: {}", activity.id),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &ActivityId) -> Result<Option<Activity>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, contact_id, deal_id, kind, subject,
                   description, date, completed, created_at
            FROM activities WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::store(format!("Failed to fetch activity: {}", e)))?;

        row.map(row_to_activity).transpose()
    }

    async fn list(&self) -> Result<Vec<Activity>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, contact_id, deal_id, kind, subject,
                   description, date, completed, created_at
            FROM activities ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::store(format!("Failed to list activities: {}", e)))?;

        rows.into_iter().map(row_to_activity).collect()
    }

    async fn find_by_contact_id(
        &self,
        contact_id: &ContactId,
    ) -> Result<Vec<Activity>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, contact_id, deal_id, kind, subject,
                   description, date, completed, created_at
            FROM activities WHERE contact_id = $1 ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(contact_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::store(format!("Failed to list activities by contact: {}", e)))?;

        rows.into_iter().map(row_to_activity).collect()
    }
}

fn row_to_activity(row: PgRow) -> Result<Activity, DomainError> {
    let id: uuid::Uuid = column(&row, "id")?;
    let contact_id: uuid::Uuid = column(&row, "contact_id")?;
    let deal_id: Option<uuid::Uuid> = column(&row, "deal_id")?;
    let date: chrono::DateTime<chrono::Utc> = column(&row, "date")?;
    let created_at: chrono::DateTime<chrono::Utc> = column(&row, "created_at")?;

    Ok(Activity {
        id: ActivityId::from_uuid(id),
        contact_id: ContactId::from_uuid(contact_id),
        deal_id: deal_id.map(DealId::from_uuid),
        kind: column(&row, "kind")?,
        subject: column(&row, "subject")?,
        description: column(&row, "description")?,
        date: Timestamp::from_datetime(date),
        completed: column(&row, "completed")?,
        created_at: Timestamp::from_datetime(created_at),
    })
}
