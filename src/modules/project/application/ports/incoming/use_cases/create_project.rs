use async_trait::async_trait;

use super::ProjectForm;
use crate::media::application::domain::entities::UploadedFile;
use crate::media::application::services::MediaStoreError;
use crate::project::application::domain::entities::ProjectRecord;

//
// ──────────────────────────────────────────────────────────
// Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateProjectError {
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Media(#[from] MediaStoreError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        form: ProjectForm,
        image: Option<UploadedFile>,
    ) -> Result<ProjectRecord, CreateProjectError>;
}
