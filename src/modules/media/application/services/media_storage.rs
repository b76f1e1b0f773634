use std::sync::Arc;
use tracing::{info, warn};

use crate::media::application::domain::{
    entities::{AssetFolder, CleanupOutcome, ImageInfo, StorageKind, UploadedFile},
    image_info::extract_image_info,
    policies::{UploadPolicy, UploadPolicyError},
};
use crate::media::application::ports::outgoing::{
    DeleteOutcome, SaveRequest, StorageBackend, StorageError,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MediaStoreError {
    #[error(transparent)]
    Rejected(#[from] UploadPolicyError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Entry point the use cases go through for images: validates uploads,
/// hands them to the active backend and performs best-effort cleanup.
#[derive(Clone)]
pub struct MediaStorage {
    backend: Arc<dyn StorageBackend>,
    policy: UploadPolicy,
}

impl MediaStorage {
    pub fn new(backend: Arc<dyn StorageBackend>, policy: UploadPolicy) -> Self {
        Self { backend, policy }
    }

    pub fn kind(&self) -> StorageKind {
        self.backend.kind()
    }

    pub fn is_remote(&self) -> bool {
        self.kind().is_remote()
    }

    pub fn policy(&self) -> &UploadPolicy {
        &self.policy
    }

    /// Validates and stores `file`. `name_hint` defaults to the file's stem.
    pub async fn store(
        &self,
        file: &UploadedFile,
        folder: AssetFolder,
        name_hint: Option<&str>,
    ) -> Result<ImageInfo, MediaStoreError> {
        let extension = self.policy.validate(file)?;

        let request = SaveRequest {
            folder,
            name_hint: name_hint.unwrap_or_else(|| file.stem()).to_string(),
            extension,
        };

        let descriptor = self.backend.save(file, &request).await?;
        let info = extract_image_info(Some(&descriptor));

        info!(
            backend = %self.kind(),
            url = ?info.image_url,
            size = file.size(),
            "Stored uploaded image"
        );

        Ok(info)
    }

    /// Deletes `asset` through the active backend. Never fails the caller.
    pub async fn discard(&self, asset: &ImageInfo) -> CleanupOutcome {
        match self.backend.delete(asset).await {
            Ok(DeleteOutcome::Deleted) => {
                info!(url = ?asset.image_url, public_id = ?asset.image_public_id, "Discarded asset");
                CleanupOutcome::Removed
            }
            Ok(DeleteOutcome::NotFound) => CleanupOutcome::Missing,
            Ok(DeleteOutcome::Skipped) => CleanupOutcome::Skipped,
            Err(e) => {
                warn!(
                    error = %e,
                    url = ?asset.image_url,
                    public_id = ?asset.image_public_id,
                    "Failed to discard asset"
                );
                CleanupOutcome::Failed(e.to_string())
            }
        }
    }

    /// Deletes a remote asset once its owning record is gone.
    pub async fn discard_remote_asset(&self, asset: &ImageInfo) -> CleanupOutcome {
        if !self.is_remote() || asset.image_public_id.is_none() {
            return CleanupOutcome::Skipped;
        }
        self.discard(asset).await
    }

    /// Deletes the previous remote asset after an image replacement, but only
    /// when the new image is itself remote and has a different id.
    pub async fn discard_replaced(&self, previous: &ImageInfo, current: &ImageInfo) -> CleanupOutcome {
        if current.image_public_id.is_none() || previous.image_public_id == current.image_public_id {
            return CleanupOutcome::Skipped;
        }
        self.discard_remote_asset(previous).await
    }

    /// Deletes whatever asset a re-saved record used to point at, remote or
    /// local, when it differs from the new one.
    pub async fn discard_superseded(&self, previous: &ImageInfo, current: &ImageInfo) -> CleanupOutcome {
        if previous == current || previous.is_empty() {
            return CleanupOutcome::Skipped;
        }
        self.discard(previous).await
    }
}
