use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::message::application::ports::outgoing::{
    MessageRepository, MessageRepositoryError, NewMessage,
};
use crate::message::domain::entities::MessageRecord;

#[derive(Clone, Default)]
pub struct InMemoryMessageRepository {
    messages: Arc<Mutex<Vec<MessageRecord>>>,
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn save(&self, message: NewMessage) -> Result<MessageRecord, MessageRepositoryError> {
        let record = MessageRecord {
            id: Uuid::new_v4(),
            name: message.name,
            email: message.email,
            message: message.message,
            ip: message.ip,
            user_agent: message.user_agent,
            created_at: Utc::now(),
        };
        self.messages.lock().unwrap().push(record.clone());
        Ok(record)
    }

    /// Insertion order stands in for `created_at`, which can tie at clock
    /// resolution.
    async fn list_newest_first(&self) -> Result<Vec<MessageRecord>, MessageRepositoryError> {
        Ok(self.messages.lock().unwrap().iter().rev().cloned().collect())
    }
}
