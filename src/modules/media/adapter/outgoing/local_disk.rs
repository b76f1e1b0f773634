use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;
use regex::Regex;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;
use tracing::debug;

use crate::media::application::domain::entities::{
    AssetFolder, ImageInfo, StorageKind, UploadDescriptor, UploadedFile,
};
use crate::media::application::ports::outgoing::{
    DeleteOutcome, SaveRequest, StorageBackend, StorageError,
};

const MAX_HINT_LEN: usize = 64;

static UNSAFE_NAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_-]").expect("static regex"));

/// Replaces every character outside `[A-Za-z0-9_-]` with `_`, caps the length
/// and never returns an empty string.
pub fn sanitize_name_hint(hint: &str) -> String {
    let cleaned = UNSAFE_NAME_CHARS.replace_all(hint.trim(), "_");
    let truncated: String = cleaned.chars().take(MAX_HINT_LEN).collect();
    if truncated.is_empty() {
        "file".to_string()
    } else {
        truncated
    }
}

fn unique_filename(hint: &str, extension: &str) -> String {
    let suffix: u32 = rand::thread_rng().gen_range(0..1_000_000_000);
    format!(
        "{}-{}-{}.{}",
        sanitize_name_hint(hint),
        Utc::now().timestamp_millis(),
        suffix,
        extension
    )
}

/// Stores files under `{public_dir}/uploads` and `{public_dir}/reports`, which
/// the HTTP layer serves as `/uploads/*` and `/reports/*`.
#[derive(Debug, Clone)]
pub struct LocalDiskBackend {
    public_dir: PathBuf,
}

impl LocalDiskBackend {
    /// Creates both asset directories if they are missing.
    pub async fn init(public_dir: impl Into<PathBuf>) -> io::Result<Self> {
        let backend = Self {
            public_dir: public_dir.into(),
        };
        for folder in [AssetFolder::Uploads, AssetFolder::Reports] {
            tokio::fs::create_dir_all(backend.folder_dir(folder)).await?;
        }
        Ok(backend)
    }

    pub fn folder_dir(&self, folder: AssetFolder) -> PathBuf {
        self.public_dir.join(folder.dir_name())
    }

    /// Maps a public URL like `/reports/x.png` back to a file inside one of
    /// the asset folders. Anything else (remote URLs, defaults such as
    /// `/profile.jpg`, traversal attempts) is not ours to delete.
    fn resolve_public_path(&self, url: &str) -> Option<PathBuf> {
        let folder = [AssetFolder::Uploads, AssetFolder::Reports]
            .into_iter()
            .find(|f| url.starts_with(&format!("{}/", f.public_prefix())))?;

        let name = &url[folder.public_prefix().len() + 1..];
        let mut components = Path::new(name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(file)), None) => Some(self.folder_dir(folder).join(file)),
            _ => None,
        }
    }
}

#[async_trait]
impl StorageBackend for LocalDiskBackend {
    fn kind(&self) -> StorageKind {
        StorageKind::Local
    }

    async fn save(
        &self,
        file: &UploadedFile,
        request: &SaveRequest,
    ) -> Result<UploadDescriptor, StorageError> {
        let filename = unique_filename(&request.name_hint, &request.extension);
        let path = self.folder_dir(request.folder).join(&filename);

        tokio::fs::write(&path, &file.bytes)
            .await
            .map_err(|e| StorageError::Write(e.to_string()))?;

        debug!(path = %path.display(), "Wrote upload to disk");

        Ok(UploadDescriptor {
            backend: StorageKind::Local,
            path: Some(path.to_string_lossy().into_owned()),
            secure_url: None,
            filename: Some(filename),
            public_id: None,
            local_prefix: request.folder.public_prefix().to_string(),
        })
    }

    async fn delete(&self, asset: &ImageInfo) -> Result<DeleteOutcome, StorageError> {
        let Some(path) = asset
            .image_url
            .as_deref()
            .and_then(|url| self.resolve_public_path(url))
        else {
            return Ok(DeleteOutcome::Skipped);
        };

        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(DeleteOutcome::Deleted),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(DeleteOutcome::NotFound),
            Err(e) => Err(StorageError::Delete(e.to_string())),
        }
    }
}
