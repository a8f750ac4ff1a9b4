//! GetPipelineBoardHandler - Query handler for the board view.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::pipeline::PipelineBoard;
use crate::ports::DealRepository;

/// Handler for building the stage-grouped board.
pub struct GetPipelineBoardHandler {
    deals: Arc<dyn DealRepository>,
}

impl GetPipelineBoardHandler {
    pub fn new(deals: Arc<dyn DealRepository>) -> Self {
        Self { deals }
    }

    pub async fn handle(&self) -> Result<PipelineBoard, DomainError> {
        let deals = self.deals.list().await?;
        Ok(PipelineBoard::build(deals))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryStore;
    use crate::domain::crm::{Contact, Deal};
    use crate::domain::foundation::UserId;
    use crate::domain::pipeline::Stage;
    use crate::ports::ContactRepository;

    #[tokio::test]
    async fn board_reflects_stored_deals() {
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

        for (title, stage) in [
            ("A", "qualified"),
            ("B", "proposal"),
            ("C", "mystery-stage"),
        ] {
            let deal = Deal::new(
                contact.id,
                title.to_string(),
                1000.0,
                Some(stage.to_string()),
                0,
                None,
                None,
            )
            .unwrap();
            DealRepository::insert(store.as_ref(), &deal).await.unwrap();
        }

        let board = GetPipelineBoardHandler::new(store).handle().await.unwrap();

        assert_eq!(board.deal_count(), 3);
        // Unknown stage falls into the qualified column.
        assert_eq!(board.deals_in(Stage::Qualified).len(), 2);
        assert_eq!(board.deals_in(Stage::Proposal).len(), 1);
    }

    #[tokio::test]
    async fn empty_store_yields_empty_board() {
        let store = Arc::new(InMemoryStore::new());
        let board = GetPipelineBoardHandler::new(store).handle().await.unwrap();
        assert_eq!(board.deal_count(), 0);
        assert_eq!(board.columns.len(), 5);
    }
}
