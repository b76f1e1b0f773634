use async_trait::async_trait;

use crate::media::application::domain::entities::UploadedFile;
use crate::media::application::services::MediaStoreError;
use crate::visualization::application::domain::entities::VisualizationRecord;

/// Text fields of the save form, as received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisualizationForm {
    pub visualization_id: Option<String>,
    pub report_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SaveVisualizationError {
    #[error("No image file provided")]
    MissingFile,

    #[error("Missing visualizationId or reportType")]
    MissingKey,

    #[error(transparent)]
    Media(#[from] MediaStoreError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SaveVisualizationUseCase: Send + Sync {
    async fn execute(
        &self,
        form: VisualizationForm,
        image: Option<UploadedFile>,
    ) -> Result<VisualizationRecord, SaveVisualizationError>;
}
