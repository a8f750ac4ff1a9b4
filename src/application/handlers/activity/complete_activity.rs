//! CompleteActivityHandler - Command handler for marking activities done.

use std::sync::Arc;

use crate::domain::crm::Activity;
use crate::domain::foundation::{ActivityId, DomainError, ErrorCode};
use crate::ports::ActivityRepository;

/// Command to mark an activity as completed.
#[derive(Debug, Clone)]
pub struct CompleteActivityCommand {
    pub activity_id: ActivityId,
}

/// Handler for completing activities. Idempotent.
pub struct CompleteActivityHandler {
    activities: Arc<dyn ActivityRepository>,
}

impl CompleteActivityHandler {
    pub fn new(activities: Arc<dyn ActivityRepository>) -> Self {
        Self { activities }
    }

    pub async fn handle(&self, cmd: CompleteActivityCommand) -> Result<Activity, DomainError> {
        let mut activity = self
            .activities
            .find_by_id(&cmd.activity_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::ActivityNotFound,
                    format!("Activity not found: {}", cmd.activity_id),
                )
            })?;

        activity.complete();
        self.activities.update(&activity).await?;
        Ok(activity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryStore;
    use crate::domain::crm::Contact;
    use crate::domain::foundation::{Timestamp, UserId};
    use crate::ports::ContactRepository;

    async fn seeded_activity() -> (Arc<InMemoryStore>, ActivityId) {
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

        let activity = Activity::new(
            contact.id,
            None,
            "task".to_string(),
            "Follow up".to_string(),
            None,
            Timestamp::now(),
        )
        .unwrap();
        ActivityRepository::insert(store.as_ref(), &activity)
            .await
            .unwrap();
        (store, activity.id)
    }

    #[tokio::test]
    async fn completes_and_persists() {
        let (store, activity_id) = seeded_activity().await;
        let handler = CompleteActivityHandler::new(store.clone());

        let completed = handler
            .handle(CompleteActivityCommand { activity_id })
            .await
            .unwrap();
        assert!(completed.completed);

        let stored = ActivityRepository::find_by_id(store.as_ref(), &activity_id)
            .await
            .unwrap()
            .unwrap();
        assert!(stored.completed);
    }

    #[tokio::test]
    async fn completing_twice_still_succeeds() {
        let (store, activity_id) = seeded_activity().await;
        let handler = CompleteActivityHandler::new(store.clone());

        handler
            .handle(CompleteActivityCommand { activity_id })
            .await
            .unwrap();
        let second = handler
            .handle(CompleteActivityCommand { activity_id })
            .await
            .unwrap();

        assert!(second.completed);
    }

    #[tokio::test]
    async fn fails_for_unknown_activity() {
        let (store, _) = seeded_activity().await;
        let handler = CompleteActivityHandler::new(store);

        let err = handler
            .handle(CompleteActivityCommand {
                activity_id: ActivityId::new(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ActivityNotFound);
    }
}
