//! PostgreSQL implementation of ContactRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::column;
use crate::domain::crm::Contact;
use crate::domain::foundation::{ContactId, DomainError, ErrorCode, Timestamp, UserId};
use crate::ports::ContactRepository;

/// PostgreSQL implementation of ContactRepository.
#[derive(Clone)]
pub struct PostgresContactRepository {
    pool: PgPool,
}

impl PostgresContactRepository {
    /// Creates a new PostgresContactRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactRepository for PostgresContactRepository {
    async fn insert(&self, contact: &Contact) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO contacts (
                id, user_id, name, email, phone, company, title,
                status, source, notes, assigned_to, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(contact.id.as_uuid())
        .bind(contact.user_id.as_str())
        .bind(&contact.name)
        .bind(&contact.email)
        .bind(&contact.phone)
        .bind(&contact.company)
        .bind(&contact.title)
        .bind(&contact.status)
        .bind(&contact.source)
        .bind(&contact.notes)
        .bind(&contact.assigned_to)
        .bind(contact.created_at.as_datetime())
        .bind(contact.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::store(format!("Failed to insert contact: {}", e)))?;

        Ok(())
    }

    async fn update(&self, contact: &Contact) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE contacts SET
                name = $2,
                email = $3,
                phone = $4,
                company = $5,
                title = $6,
                status = $7,
                source = $8,
                notes = $9,
                assigned_to = $10,
                updated_at = $11
            WHERE id = $1
            "#,
        )
        .bind(contact.id.as_uuid())
        .bind(&contact.name)
        .bind(&contact.email)
        .bind(&contact.phone)
        .bind(&contact.company)
        .bind(&contact.title)
        .bind(&contact.status)
        .bind(&contact.source)
        .bind(&contact.notes)
        .bind(&contact.assigned_to)
        .bind(contact.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::store(format!("Failed to update contact: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::ContactNotFound,
                format!("Contact not found: {}", contact.id),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &ContactId) -> Result<Option<Contact>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, name, email, phone, company, title,
                   status, source, notes, assigned_to, created_at, updated_at
            FROM contacts WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::store(format!("Failed to fetch contact: {}", e)))?;

        row.map(row_to_contact).transpose()
    }

    async fn exists(&self, id: &ContactId) -> Result<bool, DomainError> {
        let result: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM contacts WHERE id = $1)")
            .bind(id.as_uuid())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::store(format!("Failed to check contact existence: {}", e)))?;

        Ok(result.0)
    }

    async fn list(&self) -> Result<Vec<Contact>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, name, email, phone, company, title,
                   status, source, notes, assigned_to, created_at, updated_at
            FROM contacts ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::store(format!("Failed to list contacts: {}", e)))?;

        rows.into_iter().map(row_to_contact).collect()
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM contacts")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::store(format!("Failed to count contacts: {}", e)))?;

        Ok(result.0 as u64)
    }

    async fn delete(&self, id: &ContactId) -> Result<(), DomainError> {
        // Dependents first, contact last, all in one transaction.
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::store(format!("Failed to begin cascade: {}", e)))?;

        sqlx::query("DELETE FROM activities WHERE contact_id = $1")
            .bind(id.as_uuid())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::store(format!("Failed to cascade activities: {}", e)))?;

        sqlx::query("DELETE FROM deals WHERE contact_id = $1")
            .bind(id.as_uuid())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::store(format!("Failed to cascade deals: {}", e)))?;

        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::store(format!("Failed to delete contact: {}", e)))?;

        if result.rows_affected() == 0 {
            // Dropping the transaction rolls the cascade back.
            return Err(DomainError::new(
                ErrorCode::ContactNotFound,
                format!("Contact not found: {}", id),
            ));
        }

        tx.commit()
            .await
            .map_err(|e| DomainError::store(format!("Failed to commit cascade: {}", e)))?;

        Ok(())
    }
}

fn row_to_contact(row: PgRow) -> Result<Contact, DomainError> {
    let id: uuid::Uuid = column(&row, "id")?;
    let user_id: String = column(&row, "user_id")?;
    let created_at: chrono::DateTime<chrono::Utc> = column(&row, "created_at")?;
    let updated_at: chrono::DateTime<chrono::Utc> = column(&row, "updated_at")?;

    Ok(Contact {
        id: ContactId::from_uuid(id),
        user_id: UserId::new(user_id)
            .map_err(|e| DomainError::store(format!("Invalid user_id: {}", e)))?,
        name: column(&row, "name")?,
        email: column(&row, "email")?,
        phone: column(&row, "phone")?,
        company: column(&row, "company")?,
        title: column(&row, "title")?,
        status: column(&row, "status")?,
        source: column(&row, "source")?,
        notes: column(&row, "notes")?,
        assigned_to: column(&row, "assigned_to")?,
        created_at: Timestamp::from_datetime(created_at),
        updated_at: Timestamp::from_datetime(updated_at),
    })
}
