//! PostgreSQL implementation of IntelRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::column;
use crate::domain::crm::CompanyIntel;
use crate::domain::foundation::{AnalysisId, DomainError, Timestamp};
use crate::ports::IntelRepository;

/// PostgreSQL implementation of IntelRepository.
#[derive(Clone)]
pub struct PostgresIntelRepository {
    pool: PgPool,
}

impl PostgresIntelRepository {
    /// Creates a new PostgresIntelRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IntelRepository for PostgresIntelRepository {
    async fn insert(&self, intel: &CompanyIntel) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO company_intel (
                id, company_name, analysis_type, content,
                model_used, generated_at, requested_by
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(intel.id.as_uuid())
        .bind(&intel.company_name)
        .bind(&intel.analysis_type)
        .bind(&intel.content)
        .bind(&intel.model_used)
        .bind(intel.generated_at.as_datetime())
        .bind(&intel.requested_by)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::store(format!("Failed to insert analysis: {}", e)))?;

        Ok(())
    }

    async fn find_by_id(&self, id: &AnalysisId) -> Result<Option<CompanyIntel>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, company_name, analysis_type, content,
                   model_used, generated_at, requested_by
            FROM company_intel WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::store(format!("Failed to fetch analysis: {}", e)))?;

        row.map(row_to_intel).transpose()
    }

    async fn list(&self) -> Result<Vec<CompanyIntel>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, company_name, analysis_type, content,
                   model_used, generated_at, requested_by
            FROM company_intel ORDER BY generated_at ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::store(format!("Failed to list analyses: {}", e)))?;

        rows.into_iter().map(row_to_intel).collect()
    }
}

fn row_to_intel(row: PgRow) -> Result<CompanyIntel, DomainError> {
    let id: uuid::Uuid = column(&row, "id")?;
    let generated_at: chrono::DateTime<chrono::Utc> = column(&row, "generated_at")?;

    Ok(CompanyIntel {
        id: AnalysisId::from_uuid(id),
        company_name: column(&row, "company_name")?,
        analysis_type: column(&row, "analysis_type")?,
        content: column(&row, "content")?,
        model_used: column(&row, "model_used")?,
        generated_at: Timestamp::from_datetime(generated_at),
        requested_by: column(&row, "requested_by")?,
    })
}
