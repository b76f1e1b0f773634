use async_trait::async_trait;

use crate::media::application::domain::entities::{
    AssetFolder, ImageInfo, StorageKind, UploadDescriptor, UploadedFile,
};

// ============================================================================
// Port Types
// ============================================================================

/// Where and under which name a validated file should be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRequest {
    pub folder: AssetFolder,
    /// Human-readable base name; backends sanitize it.
    pub name_hint: String,
    /// Normalized extension without the dot.
    pub extension: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
    /// The asset does not belong to this backend (no public id, or not a
    /// local public path).
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to write file: {0}")]
    Write(String),

    #[error("Remote storage request failed: {0}")]
    Remote(String),

    #[error("Failed to delete asset: {0}")]
    Delete(String),
}

// ============================================================================
// Port Interface
// ============================================================================

/// One storage backend is chosen at startup and shared process-wide.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    fn kind(&self) -> StorageKind;

    async fn save(
        &self,
        file: &UploadedFile,
        request: &SaveRequest,
    ) -> Result<UploadDescriptor, StorageError>;

    async fn delete(&self, asset: &ImageInfo) -> Result<DeleteOutcome, StorageError>;
}
