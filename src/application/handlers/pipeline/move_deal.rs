//! MoveDealHandler - Command handler for moving a deal between stages.
//!
//! The stage write is unconditional: any string is accepted and persisted,
//! including values outside the canonical five and moves out of the closed
//! stages. The absence of validation here is an accepted risk, not an
//! oversight; display surfaces apply their own fallback policies.

use std::sync::Arc;

use crate::domain::crm::Deal;
use crate::domain::foundation::{DealId, DomainError, ErrorCode};
use crate::ports::DealRepository;

/// Command to move a deal to a new stage.
#[derive(Debug, Clone)]
pub struct MoveDealCommand {
    pub deal_id: DealId,
    /// Accepted verbatim, no validation against the canonical stage list.
    pub stage: String,
}

/// Handler for moving deals.
pub struct MoveDealHandler {
    deals: Arc<dyn DealRepository>,
}

impl MoveDealHandler {
    pub fn new(deals: Arc<dyn DealRepository>) -> Self {
        Self { deals }
    }

    pub async fn handle(&self, cmd: MoveDealCommand) -> Result<Deal, DomainError> {
        let mut deal = self
            .deals
            .find_by_id(&cmd.deal_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::DealNotFound,
                    format!("Deal not found: {}", cmd.deal_id),
                )
            })?;

        deal.move_to_stage(cmd.stage);
        self.deals.update(&deal).await?;

        tracing::info!(deal_id = %deal.id, stage = %deal.stage, "deal moved");
        Ok(deal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryStore;
    use crate::domain::crm::Contact;
    use crate::domain::foundation::UserId;
    use crate::ports::ContactRepository;

    async fn store_with_deal(stage: &str) -> (Arc<InMemoryStore>, DealId) {
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

        let deal = Deal::new(
            contact.id,
            "Platform License".to_string(),
            45000.0,
            Some(stage.to_string()),
            30,
            None,
            None,
        )
        .unwrap();
        DealRepository::insert(store.as_ref(), &deal).await.unwrap();
        (store, deal.id)
    }

    #[tokio::test]
    async fn moves_deal_to_canonical_stage() {
        let (store, deal_id) = store_with_deal("qualified").await;
        let handler = MoveDealHandler::new(store.clone());

        let deal = handler
            .handle(MoveDealCommand {
                deal_id,
                stage: "proposal".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(deal.stage, "proposal");
        let stored = DealRepository::find_by_id(store.as_ref(), &deal_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.stage, "proposal");
    }

    #[tokio::test]
    async fn accepts_arbitrary_stage_strings() {
        let (store, deal_id) = store_with_deal("qualified").await;
        let handler = MoveDealHandler::new(store.clone());

        let deal = handler
            .handle(MoveDealCommand {
                deal_id,
                stage: "archived".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(deal.stage, "archived");
    }

    #[tokio::test]
    async fn allows_reopening_a_closed_deal() {
        let (store, deal_id) = store_with_deal("closed_won").await;
        let handler = MoveDealHandler::new(store.clone());

        let deal = handler
            .handle(MoveDealCommand {
                deal_id,
                stage: "negotiation".to_string(),
            })
            .await
            .unwrap();

        assert!(deal.is_open());
    }

    #[tokio::test]
    async fn fails_for_unknown_deal() {
        let (store, _) = store_with_deal("qualified").await;
        let handler = MoveDealHandler::new(store);

        let err = handler
            .handle(MoveDealCommand {
                deal_id: DealId::new(),
                stage: "proposal".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::DealNotFound);
    }

    #[tokio::test]
    async fn move_refreshes_updated_at() {
        let (store, deal_id) = store_with_deal("qualified").await;
        let before = DealRepository::find_by_id(store.as_ref(), &deal_id)
            .await
            .unwrap()
            .unwrap();
        let handler = MoveDealHandler::new(store.clone());

        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let moved = handler
            .handle(MoveDealCommand {
                deal_id,
                stage: "proposal".to_string(),
            })
            .await
            .unwrap();

        assert!(moved.updated_at.is_after(&before.updated_at));
        assert_eq!(moved.created_at, before.created_at);
    }
}
