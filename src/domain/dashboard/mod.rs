//! Dashboard aggregation engine.
//!
//! Pure functions over a point-in-time snapshot of the entity store. No
//! mutation, no I/O; the application layer fetches the snapshot and this
//! module computes the metrics.

mod overview;

pub use overview::{
    open_deals_count, open_pipeline_value, recent_activities, stage_summary, upcoming_tasks,
    win_rate, DashboardOverview, StageSummary, DEFAULT_ACTIVITY_LIMIT,
};
