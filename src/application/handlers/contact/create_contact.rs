//! CreateContactHandler - Command handler for creating contacts.

use std::sync::Arc;

use crate::domain::crm::Contact;
use crate::domain::foundation::{CommandMetadata, DomainError};
use crate::ports::ContactRepository;

/// Command to create a new contact.
#[derive(Debug, Clone)]
pub struct CreateContactCommand {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub title: Option<String>,
    /// Defaults to `lead` when absent.
    pub status: Option<String>,
    pub source: Option<String>,
    pub notes: Option<String>,
    pub assigned_to: Option<String>,
}

/// Handler for creating contacts.
///
/// The owning `user_id` is stamped from command metadata; no authorization
/// decision happens here.
pub struct CreateContactHandler {
    contacts: Arc<dyn ContactRepository>,
}

impl CreateContactHandler {
    pub fn new(contacts: Arc<dyn ContactRepository>) -> Self {
        Self { contacts }
    }

    pub async fn handle(
        &self,
        cmd: CreateContactCommand,
        metadata: CommandMetadata,
    ) -> Result<Contact, DomainError> {
        let contact = Contact::new(
            metadata.user_id,
            cmd.name,
            cmd.email,
            cmd.phone,
            cmd.company,
            cmd.title,
            cmd.status,
            cmd.source,
            cmd.notes,
            cmd.assigned_to,
        )?;

        self.contacts.insert(&contact).await?;

        tracing::info!(contact_id = %contact.id, "contact created");
        Ok(contact)
    }
}
