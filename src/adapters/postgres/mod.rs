//! PostgreSQL adapters implementing the repository ports.
//!
//! All queries are runtime-bound; schema lives in `migrations/`. Cascade
//! deletes are explicit transactions here rather than `ON DELETE CASCADE`
//! constraints, so the ownership rules stay visible and testable in one
//! place.

mod activity_repository;
mod contact_repository;
mod deal_repository;
mod intel_repository;

pub use activity_repository::PostgresActivityRepository;
pub use contact_repository::PostgresContactRepository;
pub use deal_repository::PostgresDealRepository;
pub use intel_repository::PostgresIntelRepository;

use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::Row;

use crate::config::DatabaseConfig;
use crate::domain::foundation::DomainError;

/// Opens a connection pool and optionally runs pending migrations.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(config.idle_timeout())
        .max_lifetime(config.max_lifetime())
        .connect(&config.url)
        .await?;

    if config.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    Ok(pool)
}

/// Reads one column, translating decode failures into store errors.
pub(crate) fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name)
        .map_err(|e| DomainError::store(format!("Failed to read column '{}': {}", name, e)))
}
