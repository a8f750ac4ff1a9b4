//! Activity command and query handlers.

mod complete_activity;
mod list_activities;
mod log_activity;

pub use complete_activity::{CompleteActivityCommand, CompleteActivityHandler};
pub use list_activities::ListActivitiesHandler;
pub use log_activity::{LogActivityCommand, LogActivityHandler};
