use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;

/// Which storage backend is active for this process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum StorageKind {
    #[serde(rename = "cloudinary")]
    Remote,
    #[serde(rename = "local")]
    Local,
}

impl StorageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKind::Remote => "cloudinary",
            StorageKind::Local => "local",
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, StorageKind::Remote)
    }
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Public area an asset lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetFolder {
    Uploads,
    Reports,
}

impl AssetFolder {
    pub fn dir_name(&self) -> &'static str {
        match self {
            AssetFolder::Uploads => "uploads",
            AssetFolder::Reports => "reports",
        }
    }

    /// URL prefix the folder is served under.
    pub fn public_prefix(&self) -> &'static str {
        match self {
            AssetFolder::Uploads => "/uploads",
            AssetFolder::Reports => "/reports",
        }
    }
}

/// A file part received from a multipart request, fully buffered.
#[derive(Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub field_name: String,
    pub original_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl fmt::Debug for UploadedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadedFile")
            .field("field_name", &self.field_name)
            .field("original_name", &self.original_name)
            .field("content_type", &self.content_type)
            .field("size", &self.bytes.len())
            .finish()
    }
}

impl UploadedFile {
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Lowercased extension of the original filename, without the dot.
    pub fn extension(&self) -> Option<String> {
        let (stem, ext) = self.original_name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }

    /// Original filename without directories or extension.
    pub fn stem(&self) -> &str {
        let base = self
            .original_name
            .rsplit(|c| c == '/' || c == '\\')
            .next()
            .unwrap_or(&self.original_name);
        match base.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem,
            _ => base,
        }
    }
}

/// Where a stored image can be found, and its remote id when the remote
/// backend produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImageInfo {
    pub image_url: Option<String>,
    pub image_public_id: Option<String>,
}

impl ImageInfo {
    pub fn new(image_url: impl Into<String>, image_public_id: Option<String>) -> Self {
        Self {
            image_url: Some(image_url.into()),
            image_public_id,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.image_url.is_none() && self.image_public_id.is_none()
    }
}

/// Raw metadata a backend reports for a stored file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadDescriptor {
    pub backend: StorageKind,
    pub path: Option<String>,
    pub secure_url: Option<String>,
    pub filename: Option<String>,
    pub public_id: Option<String>,
    pub local_prefix: String,
}

/// Answer of `GET /api/storage/status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct StorageStatus {
    pub storage: StorageKind,
    #[schema(example = "my-cloud")]
    pub cloud_name: Option<String>,
}

/// Result of a best-effort asset deletion. Callers log it and move on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanupOutcome {
    Removed,
    Missing,
    Skipped,
    Failed(String),
}
