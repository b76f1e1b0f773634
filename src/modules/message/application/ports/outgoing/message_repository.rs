use async_trait::async_trait;

use crate::message::domain::entities::MessageRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub name: String,
    pub email: String,
    pub message: String,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MessageRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn save(&self, message: NewMessage) -> Result<MessageRecord, MessageRepositoryError>;

    async fn list_newest_first(&self) -> Result<Vec<MessageRecord>, MessageRepositoryError>;
}
