//! Dashboard query handlers.
//!
//! Read-only handlers for aggregating dashboard data.

mod get_dashboard_overview;

pub use get_dashboard_overview::GetDashboardOverviewHandler;
