//! Activity repository port.
//!
//! # Design
//!
//! - **Reference integrity**: `insert` fails when the contact reference (or
//!   the deal reference, when present) does not resolve
//! - **Ordering**: `list` returns insertion order; recency/due ordering is
//!   computed by the dashboard engine

use async_trait::async_trait;

use crate::domain::crm::Activity;
use crate::domain::foundation::{ActivityId, ContactId, DomainError};

/// Repository port for activity persistence.
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// Insert a new activity.
    ///
    /// # Errors
    ///
    /// - `ReferenceNotFound` if `contact_id` (or a present `deal_id`)
    ///   doesn't resolve
    /// - `StoreUnavailable` on persistence failure
    async fn insert(&self, activity: &Activity) -> Result<(), DomainError>;

    /// Update an existing activity.
    ///
    /// # Errors
    ///
    /// - `ActivityNotFound` if the activity doesn't exist
    /// - `StoreUnavailable` on persistence failure
    async fn update(&self, activity: &Activity) -> Result<(), DomainError>;

    /// Find an activity by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &ActivityId) -> Result<Option<Activity>, DomainError>;

    /// List all activities in insertion order.
    async fn list(&self) -> Result<Vec<Activity>, DomainError>;

    /// List the activities logged against one contact, in insertion order.
    async fn find_by_contact_id(
        &self,
        contact_id: &ContactId,
    ) -> Result<Vec<Activity>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn activity_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn ActivityRepository) {}
    }
}
