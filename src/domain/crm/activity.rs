//! Activity record.
//!
//! A logged interaction with a contact, optionally attached to a deal.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ActivityId, ContactId, DealId, Timestamp, ValidationError};

/// Canonical activity kinds.
pub const ACTIVITY_KINDS: [&str; 5] = ["call", "email", "meeting", "note", "task"];

/// A logged interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Unique identifier, assigned at creation.
    pub id: ActivityId,

    /// Contact this interaction belongs to.
    pub contact_id: ContactId,

    /// Deal this interaction relates to, when any.
    pub deal_id: Option<DealId>,

    /// Interaction kind; canonical values in [`ACTIVITY_KINDS`].
    pub kind: String,

    pub subject: String,
    pub description: Option<String>,

    /// When the interaction happened or is due. Arbitrary; future dates are
    /// how tasks get scheduled.
    pub date: Timestamp,

    pub completed: bool,

    pub created_at: Timestamp,
}

impl Activity {
    /// Creates a new activity with a fresh identifier.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if `kind` or `subject` is empty
    pub fn new(
        contact_id: ContactId,
        deal_id: Option<DealId>,
        kind: String,
        subject: String,
        description: Option<String>,
        date: Timestamp,
    ) -> Result<Self, ValidationError> {
        if kind.is_empty() {
            return Err(ValidationError::empty_field("kind"));
        }
        if subject.is_empty() {
            return Err(ValidationError::empty_field("subject"));
        }

        Ok(Self {
            id: ActivityId::new(),
            contact_id,
            deal_id,
            kind,
            subject,
            description,
            date,
            completed: false,
            created_at: Timestamp::now(),
        })
    }

    /// Marks the activity as done. Idempotent.
    pub fn complete(&mut self) {
        self.completed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_activity_starts_incomplete() {
        let activity = Activity::new(
            ContactId::new(),
            None,
            "call".to_string(),
            "Discovery call".to_string(),
            None,
            Timestamp::now(),
        )
        .unwrap();

        assert!(!activity.completed);
        assert!(activity.deal_id.is_none());
    }

    #[test]
    fn new_activity_rejects_empty_subject() {
        let result = Activity::new(
            ContactId::new(),
            None,
            "email".to_string(),
            String::new(),
            None,
            Timestamp::now(),
        );
        assert!(matches!(result, Err(ValidationError::EmptyField { .. })));
    }

    #[test]
    fn new_activity_rejects_empty_kind() {
        let result = Activity::new(
            ContactId::new(),
            None,
            String::new(),
            "Follow up".to_string(),
            None,
            Timestamp::now(),
        );
        assert!(matches!(result, Err(ValidationError::EmptyField { .. })));
    }

    #[test]
    fn complete_is_idempotent() {
        let mut activity = Activity::new(
            ContactId::new(),
            Some(DealId::new()),
            "task".to_string(),
            "Send case studies".to_string(),
            None,
            Timestamp::now(),
        )
        .unwrap();

        activity.complete();
        assert!(activity.completed);
        activity.complete();
        assert!(activity.completed);
    }
}
