//! The main dashboard overview - aggregated pipeline and activity metrics.

use serde::Serialize;

use crate::domain::crm::{Activity, Contact, Deal};
use crate::domain::foundation::{Percentage, Timestamp};
use crate::domain::pipeline::Stage;

/// Default number of activities shown in the recent/upcoming lists.
pub const DEFAULT_ACTIVITY_LIMIT: usize = 10;

/// Point-in-time dashboard metrics computed from a store snapshot.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    /// Count of all contacts.
    pub total_contacts: usize,

    /// Count of deals that are neither won nor lost.
    pub open_deals_count: usize,

    /// Sum of `value` over open deals. Zero over an empty set.
    pub open_pipeline_value: f64,

    /// Won deals as a share of closed deals. Zero when nothing has closed.
    pub win_rate: Percentage,

    /// Per-stage count and value rollups, one entry per canonical stage.
    pub stage_summary: Vec<StageSummary>,

    /// Most recently created activities, newest first.
    pub recent_activities: Vec<Activity>,

    /// Incomplete activities, earliest due first.
    pub upcoming_tasks: Vec<Activity>,

    /// When this snapshot was computed.
    pub generated_at: Timestamp,
}

/// Count/value rollup for one canonical stage.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageSummary {
    pub stage: Stage,
    pub count: usize,
    pub total_value: f64,
}

impl DashboardOverview {
    /// Computes every dashboard metric from one snapshot.
    pub fn compute(contacts: &[Contact], deals: &[Deal], activities: &[Activity]) -> Self {
        Self {
            total_contacts: contacts.len(),
            open_deals_count: open_deals_count(deals),
            open_pipeline_value: open_pipeline_value(deals),
            win_rate: win_rate(deals),
            stage_summary: stage_summary(deals),
            recent_activities: recent_activities(activities, DEFAULT_ACTIVITY_LIMIT),
            upcoming_tasks: upcoming_tasks(activities, DEFAULT_ACTIVITY_LIMIT),
            generated_at: Timestamp::now(),
        }
    }

    /// Returns the rollup for one stage.
    pub fn summary_for(&self, stage: Stage) -> &StageSummary {
        // stage_summary always carries all five canonical stages.
        self.stage_summary
            .iter()
            .find(|s| s.stage == stage)
            .expect("stage summary covers every canonical stage")
    }
}

/// Count of deals that are neither won nor lost.
///
/// Deals with unrecognized stage strings are not closed, so they count.
pub fn open_deals_count(deals: &[Deal]) -> usize {
    deals.iter().filter(|d| d.is_open()).count()
}

/// Sum of `value` over open deals. Yields `0.0` over an empty set.
pub fn open_pipeline_value(deals: &[Deal]) -> f64 {
    deals.iter().filter(|d| d.is_open()).map(|d| d.value).sum()
}

/// Won deals as a share of closed deals, rounded to the nearest percent.
///
/// Defined as zero when no deal has closed; the floor value avoids a
/// division by zero and reads as "no track record yet".
pub fn win_rate(deals: &[Deal]) -> Percentage {
    let won = deals
        .iter()
        .filter(|d| Stage::parse(&d.stage) == Some(Stage::ClosedWon))
        .count() as u64;
    let lost = deals
        .iter()
        .filter(|d| Stage::parse(&d.stage) == Some(Stage::ClosedLost))
        .count() as u64;

    Percentage::from_ratio(won, won + lost)
}

/// Count/value rollups per canonical stage, in board order.
///
/// Stages with no deals report zero. Deals whose stage string is outside
/// the canonical five are excluded entirely; the board grouping buckets
/// those into `qualified` instead, and the two policies stay divergent on
/// purpose since different display surfaces consume them.
pub fn stage_summary(deals: &[Deal]) -> Vec<StageSummary> {
    Stage::ALL
        .iter()
        .map(|stage| {
            let mut count = 0;
            let mut total_value = 0.0;
            for deal in deals {
                if Stage::parse(&deal.stage) == Some(*stage) {
                    count += 1;
                    total_value += deal.value;
                }
            }
            StageSummary {
                stage: *stage,
                count,
                total_value,
            }
        })
        .collect()
}

/// The `limit` most recently created activities, newest first.
///
/// Ties on creation time keep the snapshot's insertion order.
pub fn recent_activities(activities: &[Activity], limit: usize) -> Vec<Activity> {
    let mut sorted = activities.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(limit);
    sorted
}

/// The `limit` incomplete activities, earliest `date` first, any kind.
pub fn upcoming_tasks(activities: &[Activity], limit: usize) -> Vec<Activity> {
    let mut open: Vec<Activity> = activities.iter().filter(|a| !a.completed).cloned().collect();
    open.sort_by(|a, b| a.date.cmp(&b.date));
    open.truncate(limit);
    open
}

#[cfg(test)]
#[path = "overview_test.rs"]
mod overview_test;
