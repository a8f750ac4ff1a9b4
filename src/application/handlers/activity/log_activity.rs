//! LogActivityHandler - Command handler for logging interactions.
//!
//! The `date` field arrives as a raw form string. An unparseable date falls
//! back to the current moment rather than failing; that leniency is carried
//! over from the reference behavior this tracker replaced.

use std::sync::Arc;

use crate::domain::crm::Activity;
use crate::domain::foundation::{ContactId, DealId, DomainError, Timestamp};
use crate::ports::ActivityRepository;

/// Command to log a new activity.
#[derive(Debug, Clone)]
pub struct LogActivityCommand {
    pub contact_id: ContactId,
    pub deal_id: Option<DealId>,
    /// Interaction kind, e.g. "call", "email", "meeting", "note", "task".
    pub kind: String,
    pub subject: String,
    pub description: Option<String>,
    /// Raw datetime input. Unparseable values default to now.
    pub date: String,
}

/// Handler for logging activities.
pub struct LogActivityHandler {
    activities: Arc<dyn ActivityRepository>,
}

impl LogActivityHandler {
    pub fn new(activities: Arc<dyn ActivityRepository>) -> Self {
        Self { activities }
    }

    pub async fn handle(&self, cmd: LogActivityCommand) -> Result<Activity, DomainError> {
        let date = Timestamp::parse(&cmd.date).unwrap_or_else(|| {
            tracing::debug!(raw = %cmd.date, "unparseable activity date, defaulting to now");
            Timestamp::now()
        });

        let activity = Activity::new(
            cmd.contact_id,
            cmd.deal_id,
            cmd.kind,
            cmd.subject,
            cmd.description,
            date,
        )?;

        // The store enforces the contact/deal references on insert.
        self.activities.insert(&activity).await?;

        tracing::info!(activity_id = %activity.id, kind = %activity.kind, "activity logged");
        Ok(activity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryStore;
    use crate::domain::crm::{Contact, Deal};
    use crate::domain::foundation::{ErrorCode, UserId};
    use crate::ports::{ContactRepository, DealRepository};

    async fn seeded() -> (Arc<InMemoryStore>, ContactId, DealId) {
        let store = Arc::new(InMemoryStore::new());
        let contact = Contact::new(
            UserId::new("system").unwrap(),
            "Alice".to_string(),
            "alice@example.com".to_string(),
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
        let deal = Deal::new(contact.id, "Deal".to_string(), 10.0, None, 0, None, None).unwrap();
        DealRepository::insert(store.as_ref(), &deal).await.unwrap();
        (store, contact.id, deal.id)
    }

    fn command(contact_id: ContactId, deal_id: Option<DealId>, date: &str) -> LogActivityCommand {
        LogActivityCommand {
            contact_id,
            deal_id,
            kind: "call".to_string(),
            subject: "Discovery call".to_string(),
            description: Some("Discussed platform needs.".to_string()),
            date: date.to_string(),
        }
    }

    #[tokio::test]
    async fn logs_activity_with_parsed_date() {
        let (store, contact_id, _) = seeded().await;
        let handler = LogActivityHandler::new(store.clone());

        let activity = handler
            .handle(command(contact_id, None, "2026-02-10 10:00:00"))
            .await
            .unwrap();

        assert!(!activity.completed);
        assert_eq!(
            activity.date,
            Timestamp::parse("2026-02-10 10:00:00").unwrap()
        );
        assert_eq!(store.activity_count().await, 1);
    }

    #[tokio::test]
    async fn unparseable_date_defaults_to_now() {
        let (store, contact_id, _) = seeded().await;
        let handler = LogActivityHandler::new(store.clone());

        let before = Timestamp::now();
        let activity = handler
            .handle(command(contact_id, None, "whenever"))
            .await
            .unwrap();
        let after = Timestamp::now();

        assert!(!activity.date.is_before(&before));
        assert!(!activity.date.is_after(&after));
    }

    #[tokio::test]
    async fn links_to_deal_when_reference_resolves() {
        let (store, contact_id, deal_id) = seeded().await;
        let handler = LogActivityHandler::new(store.clone());

        let activity = handler
            .handle(command(contact_id, Some(deal_id), "2026-02-10 10:00:00"))
            .await
            .unwrap();

        assert_eq!(activity.deal_id, Some(deal_id));
    }

    #[tokio::test]
    async fn fails_for_unknown_contact() {
        let (store, _, _) = seeded().await;
        let handler = LogActivityHandler::new(store.clone());

        let err = handler
            .handle(command(ContactId::new(), None, "2026-02-10 10:00:00"))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ReferenceNotFound);
        assert_eq!(store.activity_count().await, 0);
    }

    #[tokio::test]
    async fn fails_for_unknown_deal_reference() {
        let (store, contact_id, _) = seeded().await;
        let handler = LogActivityHandler::new(store.clone());

        let err = handler
            .handle(command(contact_id, Some(DealId::new()), "2026-02-10 10:00:00"))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ReferenceNotFound);
    }
}
