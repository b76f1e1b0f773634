use std::env;
use std::fmt;
use std::io;
use std::path::Path;
use std::sync::Arc;

use super::cloudinary::CloudinaryBackend;
use super::local_disk::LocalDiskBackend;
use crate::media::application::domain::entities::{StorageKind, StorageStatus};
use crate::media::application::ports::outgoing::StorageBackend;

#[derive(Clone, PartialEq, Eq)]
pub struct CloudinaryCredentials {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
}

impl fmt::Debug for CloudinaryCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloudinaryCredentials")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &"***")
            .field("api_secret", &"***")
            .finish()
    }
}

/// Storage configuration read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub cloudinary: Option<CloudinaryCredentials>,
    pub folder: String,
}

impl StorageConfig {
    pub const DEFAULT_FOLDER: &'static str = "portfolio_uploads";

    pub fn from_env() -> Self {
        Self::from_values(
            env::var("CLOUDINARY_CLOUD_NAME").ok(),
            env::var("CLOUDINARY_API_KEY").ok(),
            env::var("CLOUDINARY_API_SECRET").ok(),
            env::var("CLOUDINARY_FOLDER").ok(),
        )
    }

    /// Remote storage is enabled only when all three credentials are present
    /// and non-blank.
    pub fn from_values(
        cloud_name: Option<String>,
        api_key: Option<String>,
        api_secret: Option<String>,
        folder: Option<String>,
    ) -> Self {
        let clean = |v: Option<String>| {
            v.map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let cloudinary = match (clean(cloud_name), clean(api_key), clean(api_secret)) {
            (Some(cloud_name), Some(api_key), Some(api_secret)) => Some(CloudinaryCredentials {
                cloud_name,
                api_key,
                api_secret,
            }),
            _ => None,
        };

        Self {
            cloudinary,
            folder: clean(folder).unwrap_or_else(|| Self::DEFAULT_FOLDER.to_string()),
        }
    }

    pub fn kind(&self) -> StorageKind {
        if self.cloudinary.is_some() {
            StorageKind::Remote
        } else {
            StorageKind::Local
        }
    }

    pub fn status(&self) -> StorageStatus {
        StorageStatus {
            storage: self.kind(),
            cloud_name: self.cloudinary.as_ref().map(|c| c.cloud_name.clone()),
        }
    }
}

/// Builds the process-wide storage backend.
pub async fn select_backend(
    config: &StorageConfig,
    public_dir: &Path,
) -> io::Result<Arc<dyn StorageBackend>> {
    match &config.cloudinary {
        Some(credentials) => {
            tracing::info!(
                cloud_name = %credentials.cloud_name,
                folder = %config.folder,
                "Using Cloudinary storage"
            );
            Ok(Arc::new(CloudinaryBackend::new(
                credentials.clone(),
                config.folder.clone(),
            )))
        }
        None => {
            tracing::info!(public_dir = %public_dir.display(), "Using local disk storage");
            Ok(Arc::new(LocalDiskBackend::init(public_dir).await?))
        }
    }
}
