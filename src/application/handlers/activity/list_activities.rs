//! ListActivitiesHandler - Query handler for the activity log view.

use std::sync::Arc;

use crate::domain::crm::Activity;
use crate::domain::foundation::DomainError;
use crate::ports::ActivityRepository;

/// Handler for listing all activities, newest first.
pub struct ListActivitiesHandler {
    activities: Arc<dyn ActivityRepository>,
}

impl ListActivitiesHandler {
    pub fn new(activities: Arc<dyn ActivityRepository>) -> Self {
        Self { activities }
    }

    pub async fn handle(&self) -> Result<Vec<Activity>, DomainError> {
        let mut activities = self.activities.list().await?;
        // Stable sort keeps insertion order among creation-time ties.
        activities.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(activities)
    }
}
