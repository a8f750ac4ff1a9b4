//! Contact record.
//!
//! A contact is a prospective or existing customer. It exclusively owns its
//! deals and activities: deleting a contact removes them too (repository
//! cascade, see the store adapters).

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ContactId, Timestamp, UserId, ValidationError};

/// Canonical contact lifecycle labels.
///
/// The store keeps `status` as free text; this list is what the UI offers.
pub const CONTACT_STATUSES: [&str; 6] = [
    "lead",
    "contacted",
    "proposal",
    "negotiation",
    "closed_won",
    "closed_lost",
];

/// Status assigned when the caller does not supply one.
pub const DEFAULT_CONTACT_STATUS: &str = "lead";

/// A prospective or existing customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// Unique identifier, assigned at creation.
    pub id: ContactId,

    /// User who owns this contact (from the auth collaborator).
    pub user_id: UserId,

    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub title: Option<String>,

    /// Lifecycle label; canonical values in [`CONTACT_STATUSES`].
    pub status: String,

    /// Acquisition channel (e.g. "website", "referral", "linkedin").
    pub source: Option<String>,
    pub notes: Option<String>,
    pub assigned_to: Option<String>,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Contact {
    /// Creates a new contact with a fresh identifier and timestamps.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if `name` or `email` is empty
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_id: UserId,
        name: String,
        email: String,
        phone: Option<String>,
        company: Option<String>,
        title: Option<String>,
        status: Option<String>,
        source: Option<String>,
        notes: Option<String>,
        assigned_to: Option<String>,
    ) -> Result<Self, ValidationError> {
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if email.is_empty() {
            return Err(ValidationError::empty_field("email"));
        }

        let now = Timestamp::now();
        Ok(Self {
            id: ContactId::new(),
            user_id,
            name,
            email,
            phone,
            company,
            title,
            status: status.unwrap_or_else(|| DEFAULT_CONTACT_STATUS.to_string()),
            source,
            notes,
            assigned_to,
            created_at: now,
            updated_at: now,
        })
    }

    /// Refreshes the update timestamp after a field mutation.
    pub fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}
