//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Repository Ports
//!
//! - `ContactRepository` - Contact persistence; owns the cascade delete
//! - `DealRepository` - Deal persistence with contact reference checks
//! - `ActivityRepository` - Activity persistence with reference checks
//! - `IntelRepository` - Generated company analyses
//!
//! ## Collaborator Ports
//!
//! - `AnalysisProvider` - Black-box company analysis generation (LLM-backed
//!   in production; only a mock adapter ships with the core)

mod activity_repository;
mod analysis_provider;
mod contact_repository;
mod deal_repository;
mod intel_repository;

pub use activity_repository::ActivityRepository;
pub use analysis_provider::{AnalysisError, AnalysisProvider, AnalysisReport, AnalysisRequest};
pub use contact_repository::ContactRepository;
pub use deal_repository::DealRepository;
pub use intel_repository::IntelRepository;
