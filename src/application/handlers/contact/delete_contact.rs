//! DeleteContactHandler - Command handler for cascading contact deletion.

use std::sync::Arc;

use crate::domain::foundation::{ContactId, DomainError};
use crate::ports::ContactRepository;

/// Command to delete a contact and everything it owns.
#[derive(Debug, Clone)]
pub struct DeleteContactCommand {
    pub contact_id: ContactId,
}

/// Handler for deleting contacts.
///
/// The repository performs the cascade atomically: the contact and all its
/// deals and activities disappear together or not at all.
pub struct DeleteContactHandler {
    contacts: Arc<dyn ContactRepository>,
}

impl DeleteContactHandler {
    pub fn new(contacts: Arc<dyn ContactRepository>) -> Self {
        Self { contacts }
    }

    pub async fn handle(&self, cmd: DeleteContactCommand) -> Result<(), DomainError> {
        self.contacts.delete(&cmd.contact_id).await?;
        tracing::info!(contact_id = %cmd.contact_id, "contact deleted with cascade");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryStore;
    use crate::domain::crm::{Activity, Contact, Deal};
    use crate::domain::foundation::{ErrorCode, Timestamp, UserId};
    use crate::ports::{ActivityRepository, DealRepository};

    #[tokio::test]
    async fn delete_cascades_deals_and_activities() {
        let store = Arc::new(InMemoryStore::new());
        let contact = Contact::new(
            UserId::new("system").unwrap(),
            "Alice Johnson".to_string(),
            "alice@techcorp.com".to_string(),
            None,
            None,
            None,
            None,
            None,
            None,
            None,
        )
        .unwrap();
        ContactRepository::insert(store.as_ref(), &contact)
            .await
            .unwrap();

        let d1 = Deal::new(contact.id, "One".to_string(), 10.0, None, 0, None, None).unwrap();
        let d2 = Deal::new(contact.id, "Two".to_string(), 20.0, None, 0, None, None).unwrap();
        DealRepository::insert(store.as_ref(), &d1).await.unwrap();
        DealRepository::insert(store.as_ref(), &d2).await.unwrap();

        for subject in ["a", "b", "c"] {
            let activity = Activity::new(
                contact.id,
                Some(d1.id),
                "call".to_string(),
                subject.to_string(),
                None,
                Timestamp::now(),
            )
            .unwrap();
            ActivityRepository::insert(store.as_ref(), &activity)
                .await
                .unwrap();
        }

        DeleteContactHandler::new(store.clone())
            .handle(DeleteContactCommand {
                contact_id: contact.id,
            })
            .await
            .unwrap();

        assert_eq!(ContactRepository::count(store.as_ref()).await.unwrap(), 0);
        assert_eq!(store.deal_count().await, 0);
        assert_eq!(store.activity_count().await, 0);
    }

    #[tokio::test]
    async fn delete_missing_contact_fails() {
        let store = Arc::new(InMemoryStore::new());
        let handler = DeleteContactHandler::new(store);

        let err = handler
            .handle(DeleteContactCommand {
                contact_id: ContactId::new(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ContactNotFound);
    }
}
