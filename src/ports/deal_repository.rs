//! Deal repository port.
//!
//! # Design
//!
//! - **Reference integrity**: `insert` fails when the owning contact does
//!   not exist
//! - **Stage is opaque here**: the store persists whatever stage string the
//!   engine hands it; interpretation belongs to `domain::pipeline`

use async_trait::async_trait;

use crate::domain::crm::Deal;
use crate::domain::foundation::{ContactId, DealId, DomainError};

/// Repository port for deal persistence.
#[async_trait]
pub trait DealRepository: Send + Sync {
    /// Insert a new deal.
    ///
    /// # Errors
    ///
    /// - `ReferenceNotFound` if `contact_id` doesn't resolve
    /// - `StoreUnavailable` on persistence failure
    async fn insert(&self, deal: &Deal) -> Result<(), DomainError>;

    /// Update an existing deal.
    ///
    /// # Errors
    ///
    /// - `DealNotFound` if the deal doesn't exist
    /// - `StoreUnavailable` on persistence failure
    async fn update(&self, deal: &Deal) -> Result<(), DomainError>;

    /// Find a deal by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &DealId) -> Result<Option<Deal>, DomainError>;

    /// List all deals in insertion order.
    async fn list(&self) -> Result<Vec<Deal>, DomainError>;

    /// List the deals owned by one contact, in insertion order.
    async fn find_by_contact_id(&self, contact_id: &ContactId) -> Result<Vec<Deal>, DomainError>;

    /// Delete a deal and cascade to its activities.
    ///
    /// No handler exposes this today; it exists so a future delete surface
    /// keeps the cascade invariant in one place.
    ///
    /// # Errors
    ///
    /// - `DealNotFound` if the deal doesn't exist
    /// - `StoreUnavailable` on persistence failure
    async fn delete(&self, id: &DealId) -> Result<(), DomainError>;
}
