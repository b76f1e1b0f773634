use async_trait::async_trait;
use uuid::Uuid;

use super::ProjectForm;
use crate::media::application::domain::entities::UploadedFile;
use crate::media::application::services::MediaStoreError;
use crate::project::application::domain::entities::ProjectRecord;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateProjectError {
    #[error("Project not found")]
    NotFound,

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Media(#[from] MediaStoreError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        form: ProjectForm,
        image: Option<UploadedFile>,
    ) -> Result<ProjectRecord, UpdateProjectError>;
}
