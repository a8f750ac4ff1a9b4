//! CreateDealHandler - Command handler for creating deals.
//!
//! Input arrives form-shaped: `value` and `expected_close` are raw strings.
//! The two fields get different treatment on parse failure and that split
//! is load-bearing: a bad value is a hard validation error, a bad date is
//! silently treated as absent. The date leniency mirrors the reference
//! behavior this tracker replaced and is kept as a compatibility quirk.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::crm::Deal;
use crate::domain::foundation::{ContactId, DomainError, ErrorCode, ValidationError};
use crate::ports::{ContactRepository, DealRepository};

/// Command to create a new deal.
#[derive(Debug, Clone)]
pub struct CreateDealCommand {
    pub title: String,
    /// Raw numeric input. Must parse as a non-negative number.
    pub value: String,
    pub contact_id: ContactId,
    /// Defaults to `qualified` when absent. Not validated against the
    /// canonical stage list.
    pub stage: Option<String>,
    /// Defaults to 0 when absent.
    pub probability: Option<i32>,
    /// Raw `YYYY-MM-DD` input. Unparseable values are treated as absent.
    pub expected_close: Option<String>,
    pub notes: Option<String>,
}

/// Handler for creating deals.
pub struct CreateDealHandler {
    contacts: Arc<dyn ContactRepository>,
    deals: Arc<dyn DealRepository>,
}

impl CreateDealHandler {
    pub fn new(contacts: Arc<dyn ContactRepository>, deals: Arc<dyn DealRepository>) -> Self {
        Self { contacts, deals }
    }

    pub async fn handle(&self, cmd: CreateDealCommand) -> Result<Deal, DomainError> {
        let value: f64 = cmd
            .value
            .trim()
            .parse()
            .map_err(|_| ValidationError::invalid_format("value", "not a number"))?;
        if !value.is_finite() || value < 0.0 {
            return Err(ValidationError::negative_value("value", value).into());
        }

        if !self.contacts.exists(&cmd.contact_id).await? {
            return Err(DomainError::new(
                ErrorCode::ReferenceNotFound,
                format!("Deal references unknown contact: {}", cmd.contact_id),
            ));
        }

        let expected_close = cmd.expected_close.as_deref().and_then(|raw| {
            let parsed = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok();
            if parsed.is_none() {
                tracing::debug!(raw, "dropping unparseable expected_close date");
            }
            parsed
        });

        let deal = Deal::new(
            cmd.contact_id,
            cmd.title,
            value,
            cmd.stage,
            cmd.probability.unwrap_or(0),
            expected_close,
            cmd.notes,
        )?;

        self.deals.insert(&deal).await?;

        tracing::info!(deal_id = %deal.id, stage = %deal.stage, "deal created");
        Ok(deal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryStore;
    use crate::domain::crm::Contact;
    use crate::domain::foundation::UserId;

    async fn store_with_contact() -> (Arc<InMemoryStore>, ContactId) {
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
        (store, contact.id)
    }

    fn handler(store: &Arc<InMemoryStore>) -> CreateDealHandler {
        CreateDealHandler::new(store.clone(), store.clone())
    }

    fn base_command(contact_id: ContactId) -> CreateDealCommand {
        CreateDealCommand {
            title: "Platform License".to_string(),
            value: "45000".to_string(),
            contact_id,
            stage: None,
            probability: None,
            expected_close: None,
            notes: None,
        }
    }

    #[tokio::test]
    async fn creates_deal_with_defaults() {
        let (store, contact_id) = store_with_contact().await;

        let deal = handler(&store)
            .handle(base_command(contact_id))
            .await
            .unwrap();

        assert_eq!(deal.value, 45000.0);
        assert_eq!(deal.stage, "qualified");
        assert_eq!(deal.probability, 0);
        assert_eq!(store.deal_count().await, 1);
    }

    #[tokio::test]
    async fn accepts_caller_supplied_stage_and_probability() {
        let (store, contact_id) = store_with_contact().await;

        let mut cmd = base_command(contact_id);
        cmd.stage = Some("negotiation".to_string());
        cmd.probability = Some(75);

        let deal = handler(&store).handle(cmd).await.unwrap();
        assert_eq!(deal.stage, "negotiation");
        assert_eq!(deal.probability, 75);
    }

    #[tokio::test]
    async fn rejects_unparseable_value() {
        let (store, contact_id) = store_with_contact().await;

        let mut cmd = base_command(contact_id);
        cmd.value = "lots".to_string();

        let err = handler(&store).handle(cmd).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
        assert_eq!(store.deal_count().await, 0);
    }

    #[tokio::test]
    async fn rejects_negative_value() {
        let (store, contact_id) = store_with_contact().await;

        let mut cmd = base_command(contact_id);
        cmd.value = "-500".to_string();

        let err = handler(&store).handle(cmd).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NegativeValue);
    }

    #[tokio::test]
    async fn fails_when_contact_is_unknown() {
        let (store, _) = store_with_contact().await;

        let err = handler(&store)
            .handle(base_command(ContactId::new()))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ReferenceNotFound);
        assert_eq!(store.deal_count().await, 0);
    }

    #[tokio::test]
    async fn parses_valid_expected_close() {
        let (store, contact_id) = store_with_contact().await;

        let mut cmd = base_command(contact_id);
        cmd.expected_close = Some("2026-04-15".to_string());

        let deal = handler(&store).handle(cmd).await.unwrap();
        assert_eq!(
            deal.expected_close,
            Some(NaiveDate::from_ymd_opt(2026, 4, 15).unwrap())
        );
    }

    #[tokio::test]
    async fn unparseable_expected_close_becomes_absent() {
        let (store, contact_id) = store_with_contact().await;

        let mut cmd = base_command(contact_id);
        cmd.expected_close = Some("next quarter".to_string());

        let deal = handler(&store).handle(cmd).await.unwrap();
        assert_eq!(deal.expected_close, None);
    }
}
