use async_trait::async_trait;

use crate::project::application::domain::entities::ProjectRecord;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetProjectsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Lists every project in display order with media already normalized.
#[async_trait]
pub trait GetProjectsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ProjectRecord>, GetProjectsError>;
}
