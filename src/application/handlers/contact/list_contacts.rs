//! ListContactsHandler - Query handler for the contact list view.

use std::sync::Arc;

use crate::domain::crm::Contact;
use crate::domain::foundation::DomainError;
use crate::ports::ContactRepository;

/// Handler for listing all contacts.
pub struct ListContactsHandler {
    contacts: Arc<dyn ContactRepository>,
}

impl ListContactsHandler {
    pub fn new(contacts: Arc<dyn ContactRepository>) -> Self {
        Self { contacts }
    }

    pub async fn handle(&self) -> Result<Vec<Contact>, DomainError> {
        self.contacts.list().await
    }
}
