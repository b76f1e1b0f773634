use async_trait::async_trait;
use tracing::info;

use crate::message::application::ports::outgoing::{MessageRepository, NewMessage};
use crate::message::domain::entities::{ContactError, ContactSubmission, MessageRecord};

/// Request metadata recorded next to a message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientMeta {
    pub ip: Option<String>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitMessageError {
    #[error(transparent)]
    Invalid(#[from] ContactError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ISubmitMessageUseCase: Send + Sync {
    async fn execute(
        &self,
        submission: ContactSubmission,
        client: ClientMeta,
    ) -> Result<MessageRecord, SubmitMessageError>;
}

#[derive(Debug, Clone)]
pub struct SubmitMessageUseCase<R: MessageRepository> {
    repository: R,
}

impl<R: MessageRepository> SubmitMessageUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: MessageRepository + Sync + Send> ISubmitMessageUseCase for SubmitMessageUseCase<R> {
    async fn execute(
        &self,
        submission: ContactSubmission,
        client: ClientMeta,
    ) -> Result<MessageRecord, SubmitMessageError> {
        let contact = submission.validate()?;

        let saved = self
            .repository
            .save(NewMessage {
                name: contact.name,
                email: contact.email,
                message: contact.message,
                ip: client.ip,
                user_agent: client.user_agent,
            })
            .await
            .map_err(|e| SubmitMessageError::RepositoryError(e.to_string()))?;

        info!(message_id = %saved.id, name = %saved.name, email = %saved.email, "Contact form submission saved");
        Ok(saved)
    }
}
