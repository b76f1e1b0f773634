use async_trait::async_trait;
use tracing::info;

use crate::skill::application::ports::outgoing::SkillRepository;
use crate::skill::domain::entities::{normalize_skill_names, SkillListError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReplaceSkillsError {
    #[error(transparent)]
    Invalid(#[from] SkillListError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IReplaceSkillsUseCase: Send + Sync {
    /// Returns the stored names in display order.
    async fn execute(&self, names: Vec<String>) -> Result<Vec<String>, ReplaceSkillsError>;
}

#[derive(Debug, Clone)]
pub struct ReplaceSkillsUseCase<R: SkillRepository> {
    repository: R,
}

impl<R: SkillRepository> ReplaceSkillsUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: SkillRepository + Sync + Send> IReplaceSkillsUseCase for ReplaceSkillsUseCase<R> {
    async fn execute(&self, names: Vec<String>) -> Result<Vec<String>, ReplaceSkillsError> {
        let names = normalize_skill_names(names)?;

        let stored = self
            .repository
            .replace_all(names)
            .await
            .map_err(|e| ReplaceSkillsError::RepositoryError(e.to_string()))?;

        info!(count = stored.len(), "Replaced skills");
        Ok(stored.into_iter().map(|s| s.name).collect())
    }
}
