//! CRM entity records.
//!
//! Contacts, deals, activities, and generated company analyses are plain
//! data records with foreign-key fields. Relationships are resolved through
//! explicit repository queries, never implicit traversal; cascade rules live
//! in the repository layer.

mod activity;
mod contact;
mod deal;
mod intel;

pub use activity::{Activity, ACTIVITY_KINDS};
pub use contact::{Contact, CONTACT_STATUSES, DEFAULT_CONTACT_STATUS};
pub use deal::Deal;
pub use intel::{CompanyIntel, ANALYSIS_TYPES};
