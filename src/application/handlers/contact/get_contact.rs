//! GetContactHandler - Query handler for the contact detail view.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::crm::{Activity, Contact, Deal};
use crate::domain::foundation::{ContactId, DomainError, ErrorCode};
use crate::ports::{ActivityRepository, ContactRepository, DealRepository};

/// Query for one contact with its owned records.
#[derive(Debug, Clone)]
pub struct GetContactQuery {
    pub contact_id: ContactId,
}

/// A contact together with its deals and activities.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetail {
    pub contact: Contact,
    pub deals: Vec<Deal>,
    pub activities: Vec<Activity>,
}

/// Handler for the contact detail view.
///
/// Relationships are resolved with explicit repository queries.
pub struct GetContactHandler {
    contacts: Arc<dyn ContactRepository>,
    deals: Arc<dyn DealRepository>,
    activities: Arc<dyn ActivityRepository>,
}

impl GetContactHandler {
    pub fn new(
        contacts: Arc<dyn ContactRepository>,
        deals: Arc<dyn DealRepository>,
        activities: Arc<dyn ActivityRepository>,
    ) -> Self {
        Self {
            contacts,
            deals,
            activities,
        }
    }

    pub async fn handle(&self, query: GetContactQuery) -> Result<ContactDetail, DomainError> {
        let contact = self
            .contacts
            .find_by_id(&query.contact_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::ContactNotFound,
                    format!("Contact not found: {}", query.contact_id),
                )
            })?;

        let deals = self.deals.find_by_contact_id(&query.contact_id).await?;
        let activities = self
            .activities
            .find_by_contact_id(&query.contact_id)
            .await?;

        Ok(ContactDetail {
            contact,
            deals,
            activities,
        })
    }
}
