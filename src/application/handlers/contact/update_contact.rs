//! UpdateContactHandler - Command handler for full-field contact updates.

use std::sync::Arc;

use crate::domain::crm::Contact;
use crate::domain::foundation::{ContactId, DomainError, ErrorCode, ValidationError};
use crate::ports::ContactRepository;

/// Command to update every mutable field of a contact.
///
/// The edit form posts the full record back, so this is a whole-record
/// replace; omitted optional fields clear their columns.
#[derive(Debug, Clone)]
pub struct UpdateContactCommand {
    pub contact_id: ContactId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub title: Option<String>,
    pub status: String,
    pub source: Option<String>,
    pub notes: Option<String>,
    pub assigned_to: Option<String>,
}

/// Handler for updating contacts.
pub struct UpdateContactHandler {
    contacts: Arc<dyn ContactRepository>,
}

impl UpdateContactHandler {
    pub fn new(contacts: Arc<dyn ContactRepository>) -> Self {
        Self { contacts }
    }

    pub async fn handle(&self, cmd: UpdateContactCommand) -> Result<Contact, DomainError> {
        let mut contact = self
            .contacts
            .find_by_id(&cmd.contact_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::ContactNotFound,
                    format!("Contact not found: {}", cmd.contact_id),
                )
            })?;

        if cmd.name.is_empty() {
            return Err(ValidationError::empty_field("name").into());
        }
        if cmd.email.is_empty() {
            return Err(ValidationError::empty_field("email").into());
        }

        contact.name = cmd.name;
        contact.email = cmd.email;
        contact.phone = cmd.phone;
        contact.company = cmd.company;
        contact.title = cmd.title;
        contact.status = cmd.status;
        contact.source = cmd.source;
        contact.notes = cmd.notes;
        contact.assigned_to = cmd.assigned_to;
        contact.touch();

        self.contacts.update(&contact).await?;
        Ok(contact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryStore;
    use crate::domain::foundation::UserId;

    async fn seeded_store() -> (Arc<InMemoryStore>, Contact) {
        let store = Arc::new(InMemoryStore::new());
        let contact = Contact::new(
            UserId::new("system").unwrap(),
            "Alice Johnson".to_string(),
            "alice@techcorp.com".to_string(),
            Some("+1-555-0101".to_string()),
            Some("TechCorp".to_string()),
            None,
            Some("lead".to_string()),
            None,
            None,
            None,
        )
        .unwrap();
        ContactRepository::insert(store.as_ref(), &contact)
            .await
            .unwrap();
        (store, contact)
    }

    fn full_update(contact_id: ContactId) -> UpdateContactCommand {
        UpdateContactCommand {
            contact_id,
            name: "Alice J. Carter".to_string(),
            email: "alice@newcorp.com".to_string(),
            phone: None,
            company: Some("NewCorp".to_string()),
            title: Some("CTO".to_string()),
            status: "negotiation".to_string(),
            source: None,
            notes: Some("moved companies".to_string()),
            assigned_to: None,
        }
    }

    #[tokio::test]
    async fn update_replaces_fields_and_refreshes_timestamp() {
        let (store, original) = seeded_store().await;
        let handler = UpdateContactHandler::new(store.clone());

        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let updated = handler.handle(full_update(original.id)).await.unwrap();

        assert_eq!(updated.name, "Alice J. Carter");
        assert_eq!(updated.status, "negotiation");
        // Omitted optionals are cleared by the whole-record replace.
        assert_eq!(updated.phone, None);
        assert!(updated.updated_at.is_after(&original.updated_at));
        assert_eq!(updated.created_at, original.created_at);
        // Ownership survives the update.
        assert_eq!(updated.user_id, original.user_id);
    }

    #[tokio::test]
    async fn update_missing_contact_fails() {
        let (store, _) = seeded_store().await;
        let handler = UpdateContactHandler::new(store);

        let err = handler
            .handle(full_update(ContactId::new()))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ContactNotFound);
    }

    #[tokio::test]
    async fn update_rejects_empty_name() {
        let (store, original) = seeded_store().await;
        let handler = UpdateContactHandler::new(store.clone());

        let mut cmd = full_update(original.id);
        cmd.name = String::new();

        let err = handler.handle(cmd).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptyField);

        // Stored record is untouched.
        let stored = ContactRepository::find_by_id(store.as_ref(), &original.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.name, "Alice Johnson");
    }
}
