//! Deal record.
//!
//! A deal is a sales opportunity tied to exactly one contact. The stage
//! field is free text at this layer; the pipeline engine treats it as a
//! closed enumeration with a documented fallback (see `domain::pipeline`).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ContactId, DealId, Timestamp, ValidationError};
use crate::domain::pipeline::Stage;

/// A sales opportunity owned by a contact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    /// Unique identifier, assigned at creation.
    pub id: DealId,

    /// Owning contact. Required and never rewritten after creation.
    pub contact_id: ContactId,

    pub title: String,

    /// Monetary value. Finite and non-negative.
    pub value: f64,

    /// ISO currency code, defaults to USD.
    pub currency: String,

    /// Pipeline position; canonical values are the five [`Stage`] names but
    /// arbitrary strings are accepted and persisted.
    pub stage: String,

    /// Close probability, conventionally 0-100. Not enforced.
    pub probability: i32,

    pub expected_close: Option<NaiveDate>,
    pub notes: Option<String>,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Deal {
    /// Creates a new deal with a fresh identifier and timestamps.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if `title` is empty
    /// - `NegativeValue` if `value` is negative or not finite
    pub fn new(
        contact_id: ContactId,
        title: String,
        value: f64,
        stage: Option<String>,
        probability: i32,
        expected_close: Option<NaiveDate>,
        notes: Option<String>,
    ) -> Result<Self, ValidationError> {
        if title.is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        if !value.is_finite() || value < 0.0 {
            return Err(ValidationError::negative_value("value", value));
        }

        let now = Timestamp::now();
        Ok(Self {
            id: DealId::new(),
            contact_id,
            title,
            value,
            currency: "USD".to_string(),
            stage: stage.unwrap_or_else(|| Stage::Qualified.as_str().to_string()),
            probability,
            expected_close,
            notes,
            created_at: now,
            updated_at: now,
        })
    }

    /// Moves the deal to a new stage unconditionally.
    ///
    /// Any string is accepted, including values outside the canonical five
    /// and moves out of `closed_won`/`closed_lost`. There is no transition
    /// graph at this level.
    pub fn move_to_stage(&mut self, stage: impl Into<String>) {
        self.stage = stage.into();
        self.touch();
    }

    /// True when the deal is neither won nor lost.
    pub fn is_open(&self) -> bool {
        !matches!(
            Stage::parse(&self.stage),
            Some(Stage::ClosedWon) | Some(Stage::ClosedLost)
        )
    }

    /// Refreshes the update timestamp after a field mutation.
    pub fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deal_with_stage(stage: &str) -> Deal {
        Deal::new(
            ContactId::new(),
            "Platform License".to_string(),
            45000.0,
            Some(stage.to_string()),
            30,
            None,
            None,
        )
        .unwrap()
    }

    #[test]
    fn new_deal_defaults_stage_and_currency() {
        let deal = Deal::new(
            ContactId::new(),
            "Annual Plan".to_string(),
            12000.0,
            None,
            0,
            None,
            None,
        )
        .unwrap();

        assert_eq!(deal.stage, "qualified");
        assert_eq!(deal.currency, "USD");
        assert_eq!(deal.probability, 0);
    }

    #[test]
    fn new_deal_rejects_negative_value() {
        let result = Deal::new(
            ContactId::new(),
            "Bad Deal".to_string(),
            -1.0,
            None,
            0,
            None,
            None,
        );
        assert!(matches!(result, Err(ValidationError::NegativeValue { .. })));
    }

    #[test]
    fn new_deal_rejects_nan_value() {
        let result = Deal::new(
            ContactId::new(),
            "NaN Deal".to_string(),
            f64::NAN,
            None,
            0,
            None,
            None,
        );
        assert!(matches!(result, Err(ValidationError::NegativeValue { .. })));
    }

    #[test]
    fn new_deal_rejects_empty_title() {
        let result = Deal::new(ContactId::new(), String::new(), 100.0, None, 0, None, None);
        assert!(matches!(result, Err(ValidationError::EmptyField { .. })));
    }

    #[test]
    fn move_to_stage_accepts_arbitrary_strings() {
        let mut deal = deal_with_stage("qualified");
        deal.move_to_stage("archived");
        assert_eq!(deal.stage, "archived");
    }

    #[test]
    fn move_to_stage_allows_leaving_closed_stages() {
        let mut deal = deal_with_stage("closed_won");
        deal.move_to_stage("negotiation");
        assert_eq!(deal.stage, "negotiation");
        assert!(deal.is_open());
    }

    #[test]
    fn is_open_excludes_won_and_lost_only() {
        assert!(deal_with_stage("qualified").is_open());
        assert!(deal_with_stage("proposal").is_open());
        assert!(deal_with_stage("negotiation").is_open());
        assert!(!deal_with_stage("closed_won").is_open());
        assert!(!deal_with_stage("closed_lost").is_open());
        // Unknown stages are not closed, so they count as open.
        assert!(deal_with_stage("archived").is_open());
    }
}
