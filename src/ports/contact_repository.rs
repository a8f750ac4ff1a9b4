//! Contact repository port.
//!
//! Defines the contract for persisting and retrieving contacts.
//!
//! # Design
//!
//! - **Exclusive ownership**: a contact owns its deals and activities, so
//!   `delete` is the cascade entry point
//! - **Atomic cascade**: a contact and all its dependents disappear
//!   together or not at all

use async_trait::async_trait;

use crate::domain::crm::Contact;
use crate::domain::foundation::{ContactId, DomainError};

/// Repository port for contact persistence.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Insert a new contact.
    ///
    /// # Errors
    ///
    /// - `StoreUnavailable` on persistence failure
    async fn insert(&self, contact: &Contact) -> Result<(), DomainError>;

    /// Update an existing contact.
    ///
    /// # Errors
    ///
    /// - `ContactNotFound` if the contact doesn't exist
    /// - `StoreUnavailable` on persistence failure
    async fn update(&self, contact: &Contact) -> Result<(), DomainError>;

    /// Find a contact by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &ContactId) -> Result<Option<Contact>, DomainError>;

    /// Check if a contact exists.
    async fn exists(&self, id: &ContactId) -> Result<bool, DomainError>;

    /// List all contacts in insertion order.
    async fn list(&self) -> Result<Vec<Contact>, DomainError>;

    /// Count all contacts.
    async fn count(&self) -> Result<u64, DomainError>;

    /// Delete a contact and cascade to its deals and activities.
    ///
    /// The cascade is atomic: either the contact and every dependent row are
    /// removed, or nothing is.
    ///
    /// # Errors
    ///
    /// - `ContactNotFound` if the contact doesn't exist
    /// - `StoreUnavailable` on persistence failure
    async fn delete(&self, id: &ContactId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn contact_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn ContactRepository) {}
    }
}
