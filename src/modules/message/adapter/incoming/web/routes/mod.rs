mod list_messages;
mod submit_contact;

pub use list_messages::*;
pub use submit_contact::*;
