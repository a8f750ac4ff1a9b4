//! GetDashboardOverviewHandler - Query handler for dashboard metrics.
//!
//! Fetches one snapshot of contacts, deals, and activities and hands it to
//! the pure aggregation functions. The three reads are not wrapped in a
//! transaction; a mutation racing the snapshot can yield a momentarily
//! inconsistent (never corrupt) dashboard, which is acceptable for this
//! view.

use std::sync::Arc;

use crate::domain::dashboard::DashboardOverview;
use crate::domain::foundation::DomainError;
use crate::ports::{ActivityRepository, ContactRepository, DealRepository};

/// Handler for computing the dashboard overview.
pub struct GetDashboardOverviewHandler {
    contacts: Arc<dyn ContactRepository>,
    deals: Arc<dyn DealRepository>,
    activities: Arc<dyn ActivityRepository>,
}

impl GetDashboardOverviewHandler {
    pub fn new(
        contacts: Arc<dyn ContactRepository>,
        deals: Arc<dyn DealRepository>,
        activities: Arc<dyn ActivityRepository>,
    ) -> Self {
        Self {
            contacts,
            deals,
            activities,
        }
    }

    pub async fn handle(&self) -> Result<DashboardOverview, DomainError> {
        let contacts = self.contacts.list().await?;
        let deals = self.deals.list().await?;
        let activities = self.activities.list().await?;

        Ok(DashboardOverview::compute(&contacts, &deals, &activities))
    }
}
