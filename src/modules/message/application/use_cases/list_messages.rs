use async_trait::async_trait;

use crate::message::application::ports::outgoing::MessageRepository;
use crate::message::domain::entities::MessageRecord;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListMessagesError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IListMessagesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<MessageRecord>, ListMessagesError>;
}

#[derive(Debug, Clone)]
pub struct ListMessagesUseCase<R: MessageRepository> {
    repository: R,
}

impl<R: MessageRepository> ListMessagesUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: MessageRepository + Sync + Send> IListMessagesUseCase for ListMessagesUseCase<R> {
    async fn execute(&self) -> Result<Vec<MessageRecord>, ListMessagesError> {
        self.repository
            .list_newest_first()
            .await
            .map_err(|e| ListMessagesError::RepositoryError(e.to_string()))
    }
}
