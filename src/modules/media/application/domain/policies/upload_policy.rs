use crate::media::application::domain::entities::UploadedFile;

/// Limits every image upload is checked against before any storage write.
#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_file_size_bytes: usize,
    pub allowed_extensions: &'static [&'static str],
    pub allowed_mime_types: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadPolicyError {
    #[error("File exceeds the {limit} byte limit")]
    FileTooLarge { limit: usize },

    #[error("Only image files are allowed!")]
    UnsupportedType,
}

impl UploadPolicy {
    pub const MAX_FILE_SIZE_BYTES: usize = 5 * 1024 * 1024; // 5MB
    pub const DEFAULT_ALLOWED_EXTENSIONS: &'static [&'static str] =
        &["jpg", "jpeg", "png", "gif", "webp"];
    pub const DEFAULT_ALLOWED_MIME_TYPES: &'static [&'static str] = &[
        "image/jpeg",
        "image/jpg",
        "image/png",
        "image/gif",
        "image/webp",
    ];

    /// Both the extension and the declared MIME type must be allowed.
    /// Returns the normalized extension on success.
    pub fn validate(&self, file: &UploadedFile) -> Result<String, UploadPolicyError> {
        if file.size() > self.max_file_size_bytes {
            return Err(UploadPolicyError::FileTooLarge {
                limit: self.max_file_size_bytes,
            });
        }

        let extension = file
            .extension()
            .filter(|ext| self.allowed_extensions.contains(&ext.as_str()))
            .ok_or(UploadPolicyError::UnsupportedType)?;

        let mime_ok = file
            .content_type
            .as_deref()
            .map(|ct| ct.split(';').next().unwrap_or(ct).trim().to_ascii_lowercase())
            .is_some_and(|ct| self.allowed_mime_types.contains(&ct.as_str()));

        if !mime_ok {
            return Err(UploadPolicyError::UnsupportedType);
        }

        Ok(extension)
    }
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_file_size_bytes: Self::MAX_FILE_SIZE_BYTES,
            allowed_extensions: Self::DEFAULT_ALLOWED_EXTENSIONS,
            allowed_mime_types: Self::DEFAULT_ALLOWED_MIME_TYPES,
        }
    }
}
