//! Contact command and query handlers.

mod create_contact;
mod delete_contact;
mod get_contact;
mod list_contacts;
mod update_contact;

pub use create_contact::{CreateContactCommand, CreateContactHandler};
pub use delete_contact::{DeleteContactCommand, DeleteContactHandler};
pub use get_contact::{ContactDetail, GetContactHandler, GetContactQuery};
pub use list_contacts::ListContactsHandler;
pub use update_contact::{UpdateContactCommand, UpdateContactHandler};
