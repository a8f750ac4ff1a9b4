//! CRM Pro bootstrap binary.
//!
//! Loads configuration, opens the PostgreSQL store, runs migrations when
//! configured, seeds the demo dataset into an empty store, and logs one
//! dashboard overview as a startup smoke signal. The request-handling layer
//! consumes the library API and is deployed separately.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crm_pro::adapters::{
    connect, PostgresActivityRepository, PostgresContactRepository, PostgresDealRepository,
    PostgresIntelRepository,
};
use crm_pro::application::handlers::dashboard::GetDashboardOverviewHandler;
use crm_pro::application::SeedService;
use crm_pro::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.server.log_level))
        .init();

    tracing::info!(
        environment = ?config.server.environment,
        "starting crm-pro bootstrap"
    );

    let pool = connect(&config.database).await?;

    let contacts = Arc::new(PostgresContactRepository::new(pool.clone()));
    let deals = Arc::new(PostgresDealRepository::new(pool.clone()));
    let activities = Arc::new(PostgresActivityRepository::new(pool.clone()));
    let intel = Arc::new(PostgresIntelRepository::new(pool.clone()));

    if config.server.seed_demo_data {
        // Seeding runs once, synchronously, before any concurrent traffic.
        SeedService::new(
            contacts.clone(),
            deals.clone(),
            activities.clone(),
            intel.clone(),
        )
        .run()
        .await?;
    }

    let overview = GetDashboardOverviewHandler::new(contacts, deals, activities)
        .handle()
        .await?;

    tracing::info!(
        total_contacts = overview.total_contacts,
        open_deals = overview.open_deals_count,
        open_pipeline_value = overview.open_pipeline_value,
        win_rate = %overview.win_rate,
        "store ready"
    );

    Ok(())
}
