use async_trait::async_trait;
use tracing::{error, info};

use crate::media::application::domain::entities::{AssetFolder, UploadedFile};
use crate::media::application::ports::outgoing::StorageError;
use crate::media::application::services::{MediaStorage, MediaStoreError};
use crate::visualization::application::domain::entities::{
    storage_name_hint, VisualizationRecord,
};
use crate::visualization::application::ports::incoming::use_cases::{
    SaveVisualizationError, SaveVisualizationUseCase, VisualizationForm,
};
use crate::visualization::application::ports::outgoing::{
    VisualizationRepository, VisualizationUpsert,
};

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub struct SaveVisualizationService<R>
where
    R: VisualizationRepository,
{
    repository: R,
    media: MediaStorage,
}

impl<R> SaveVisualizationService<R>
where
    R: VisualizationRepository,
{
    pub fn new(repository: R, media: MediaStorage) -> Self {
        Self { repository, media }
    }
}

#[async_trait]
impl<R> SaveVisualizationUseCase for SaveVisualizationService<R>
where
    R: VisualizationRepository + Send + Sync,
{
    async fn execute(
        &self,
        form: VisualizationForm,
        image: Option<UploadedFile>,
    ) -> Result<VisualizationRecord, SaveVisualizationError> {
        let file = image.ok_or(SaveVisualizationError::MissingFile)?;
        let (Some(visualization_id), Some(report_type)) =
            (non_blank(form.visualization_id), non_blank(form.report_type))
        else {
            return Err(SaveVisualizationError::MissingKey);
        };

        let hint = storage_name_hint(&visualization_id, &report_type);
        let stored = self
            .media
            .store(&file, AssetFolder::Reports, Some(&hint))
            .await?;
        let image_url = stored.image_url.clone().ok_or_else(|| {
            MediaStoreError::Storage(StorageError::Write(
                "backend returned no location".to_string(),
            ))
        })?;

        let previous = match self
            .repository
            .find_by_key(&visualization_id, &report_type)
            .await
        {
            Ok(previous) => previous,
            Err(e) => {
                error!(error = %e, "Failed to look up visualization");
                self.media.discard(&stored).await;
                return Err(SaveVisualizationError::RepositoryError(e.to_string()));
            }
        };

        let saved = match self
            .repository
            .upsert(VisualizationUpsert {
                visualization_id,
                report_type,
                image_url,
                image_public_id: stored.image_public_id.clone(),
            })
            .await
        {
            Ok(saved) => saved,
            Err(e) => {
                error!(error = %e, "Failed to save visualization");
                self.media.discard(&stored).await;
                return Err(SaveVisualizationError::RepositoryError(e.to_string()));
            }
        };

        // Only once the row points at the new image.
        if let Some(previous) = previous {
            self.media
                .discard_superseded(&previous.image_info(), &stored)
                .await;
        }

        info!(
            visualization_id = %saved.visualization_id,
            report_type = %saved.report_type,
            url = %saved.image_url,
            "Visualization saved"
        );
        Ok(saved)
    }
}
