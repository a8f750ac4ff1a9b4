//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `memory` - In-memory entity store (tests, local development)
//! - `postgres` - PostgreSQL entity store
//! - `analysis` - Company analysis providers (mock)

pub mod analysis;
pub mod memory;
pub mod postgres;

pub use analysis::MockAnalysisProvider;
pub use memory::InMemoryStore;
pub use postgres::{
    connect, PostgresActivityRepository, PostgresContactRepository, PostgresDealRepository,
    PostgresIntelRepository,
};
