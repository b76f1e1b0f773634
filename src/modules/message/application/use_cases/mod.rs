pub mod list_messages;
pub mod submit_message;
