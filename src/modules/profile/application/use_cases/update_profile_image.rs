use async_trait::async_trait;
use tracing::{error, info};

use super::upsert_profile::new_profile_from_defaults;
use crate::media::application::domain::entities::{AssetFolder, ImageInfo, UploadedFile};
use crate::media::application::ports::outgoing::StorageError;
use crate::media::application::services::{MediaStorage, MediaStoreError};
use crate::profile::application::ports::outgoing::{ProfileChanges, ProfileRepository};
use crate::shared::patch::PatchField;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateProfileImageError {
    #[error(transparent)]
    Media(#[from] MediaStoreError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IUpdateProfileImageUseCase: Send + Sync {
    /// Stores `file` as the profile picture and returns its public URL.
    async fn execute(&self, file: UploadedFile) -> Result<String, UpdateProfileImageError>;
}

#[derive(Clone)]
pub struct UpdateProfileImageUseCase<R: ProfileRepository> {
    repository: R,
    media: MediaStorage,
}

impl<R: ProfileRepository> UpdateProfileImageUseCase<R> {
    pub fn new(repository: R, media: MediaStorage) -> Self {
        Self { repository, media }
    }

    async fn persist(&self, stored: &ImageInfo, url: String) -> Result<Option<ImageInfo>, UpdateProfileImageError> {
        let changes = ProfileChanges {
            profile_image: Some(url),
            profile_image_public_id: match &stored.image_public_id {
                Some(id) => PatchField::Value(id.clone()),
                None => PatchField::Null,
            },
            ..Default::default()
        };

        let existing = self
            .repository
            .find_current()
            .await
            .map_err(|e| UpdateProfileImageError::RepositoryError(e.to_string()))?;

        match existing {
            Some(profile) => {
                self.repository
                    .update(profile.id, changes)
                    .await
                    .map_err(|e| UpdateProfileImageError::RepositoryError(e.to_string()))?;
                Ok(Some(profile.image_info()))
            }
            None => {
                self.repository
                    .create(new_profile_from_defaults(changes))
                    .await
                    .map_err(|e| UpdateProfileImageError::RepositoryError(e.to_string()))?;
                Ok(None)
            }
        }
    }
}

#[async_trait]
impl<R: ProfileRepository + Sync + Send> IUpdateProfileImageUseCase for UpdateProfileImageUseCase<R> {
    async fn execute(&self, file: UploadedFile) -> Result<String, UpdateProfileImageError> {
        let stored = self.media.store(&file, AssetFolder::Uploads, None).await?;
        let url = stored.image_url.clone().ok_or_else(|| {
            MediaStoreError::Storage(StorageError::Write(
                "backend returned no location".to_string(),
            ))
        })?;

        let previous = match self.persist(&stored, url.clone()).await {
            Ok(previous) => previous,
            Err(e) => {
                error!(error = %e, "Failed to save profile image");
                self.media.discard(&stored).await;
                return Err(e);
            }
        };

        if let Some(previous) = previous {
            self.media.discard_replaced(&previous, &stored).await;
        }

        info!(url = %url, "Profile image updated");
        Ok(url)
    }
}
