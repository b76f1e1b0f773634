use actix_multipart::Multipart;
use actix_web::HttpResponse;
use futures::StreamExt;
use std::collections::HashMap;

use crate::media::application::domain::entities::UploadedFile;
use crate::media::application::domain::policies::UploadPolicyError;
use crate::media::application::services::MediaStoreError;
use crate::shared::api::ApiResponse;

/// Text fields larger than this are rejected.
const MAX_TEXT_FIELD_BYTES: usize = 64 * 1024;

/// A buffered multipart body: text fields plus at most one file.
#[derive(Debug, Default)]
pub struct MultipartForm {
    fields: HashMap<String, String>,
    file: Option<UploadedFile>,
}

impl MultipartForm {
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn take_text(&mut self, name: &str) -> Option<String> {
        self.fields.remove(name)
    }

    /// Trimmed, non-empty text value.
    pub fn required_text(&self, name: &str) -> Option<String> {
        self.text(name)
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }

    pub fn take_file(&mut self) -> Option<UploadedFile> {
        self.file.take()
    }

    pub fn has_file(&self) -> bool {
        self.file.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MultipartFormError {
    #[error("Malformed multipart body: {0}")]
    Malformed(String),

    #[error("File exceeds the {limit} byte limit")]
    FileTooLarge { limit: usize },

    #[error("Field '{0}' is too large")]
    FieldTooLarge(String),
}

impl MultipartFormError {
    pub fn to_response(&self) -> HttpResponse {
        match self {
            MultipartFormError::Malformed(_) => {
                ApiResponse::bad_request("INVALID_MULTIPART", "Expected a multipart/form-data body")
            }
            MultipartFormError::FileTooLarge { .. } => {
                ApiResponse::payload_too_large("FILE_TOO_LARGE", "File exceeds the 5MB limit")
            }
            MultipartFormError::FieldTooLarge(_) => {
                ApiResponse::bad_request("VALIDATION_ERROR", &self.to_string())
            }
        }
    }
}

/// Maps upload rejections and storage failures to responses. Shared by every
/// handler that stores an image.
pub fn media_error_response(err: &MediaStoreError) -> HttpResponse {
    match err {
        MediaStoreError::Rejected(UploadPolicyError::FileTooLarge { .. }) => {
            ApiResponse::payload_too_large("FILE_TOO_LARGE", "File exceeds the 5MB limit")
        }
        MediaStoreError::Rejected(UploadPolicyError::UnsupportedType) => {
            ApiResponse::bad_request("INVALID_FILE_TYPE", "Only image files are allowed!")
        }
        MediaStoreError::Storage(e) => {
            tracing::error!(error = %e, "Storage backend failure");
            ApiResponse::internal_error()
        }
    }
}

/// Buffers a multipart body. The part named `file_field` that carries a
/// filename becomes the file; its size is capped while streaming so an
/// oversized upload is refused before anything is stored. Empty file parts
/// (a form submitted without choosing a file) are treated as absent.
pub async fn read_multipart_form(
    mut payload: Multipart,
    file_field: &str,
    max_file_bytes: usize,
) -> Result<MultipartForm, MultipartFormError> {
    let mut form = MultipartForm::default();

    while let Some(field) = payload.next().await {
        let mut field = field.map_err(|e| MultipartFormError::Malformed(e.to_string()))?;

        let name = field.name().unwrap_or_default().to_string();
        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_string);
        let content_type = field.content_type().map(|m| m.to_string());

        let is_file = filename.is_some();
        let limit = if is_file {
            max_file_bytes
        } else {
            MAX_TEXT_FIELD_BYTES
        };

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|e| MultipartFormError::Malformed(e.to_string()))?;
            if bytes.len() + chunk.len() > limit {
                return Err(if is_file {
                    MultipartFormError::FileTooLarge { limit }
                } else {
                    MultipartFormError::FieldTooLarge(name)
                });
            }
            bytes.extend_from_slice(&chunk);
        }

        match filename {
            Some(original_name) if name == file_field => {
                if !original_name.is_empty() || !bytes.is_empty() {
                    form.file = Some(UploadedFile {
                        field_name: name,
                        original_name,
                        content_type,
                        bytes,
                    });
                }
            }
            Some(_) => {
                tracing::debug!(field = %name, "Ignoring unexpected file part");
            }
            None => {
                let value = String::from_utf8(bytes)
                    .map_err(|_| MultipartFormError::Malformed(format!("field '{name}' is not UTF-8")))?;
                form.fields.insert(name, value);
            }
        }
    }

    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fixtures::{multipart_body, MultipartFile};
    use actix_web::error::PayloadError;
    use actix_web::http::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
    use actix_web::web::Bytes;

    fn multipart_from(content_type: &str, body: Vec<u8>) -> Multipart {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_str(content_type).unwrap());
        let stream = futures::stream::once(async move { Ok::<_, PayloadError>(Bytes::from(body)) });
        Multipart::new(&headers, stream)
    }

    #[actix_web::test]
    async fn test_reads_text_fields_and_file() {
        let (ct, body) = multipart_body(
            &[("title", "Portfolio"), ("featured", "true")],
            Some(MultipartFile::png("image", "shot.png")),
        );

        let mut form = read_multipart_form(multipart_from(&ct, body), "image", 1024)
            .await
            .unwrap();

        assert_eq!(form.text("title"), Some("Portfolio"));
        assert_eq!(form.required_text("featured").as_deref(), Some("true"));
        assert!(form.has_file());

        let file = form.take_file().unwrap();
        assert_eq!(file.field_name, "image");
        assert_eq!(file.original_name, "shot.png");
        assert_eq!(file.content_type.as_deref(), Some("image/png"));
        assert!(!file.bytes.is_empty());
    }

    #[actix_web::test]
    async fn test_oversized_file_is_rejected_while_streaming() {
        let mut file = MultipartFile::png("image", "big.png");
        file.bytes = vec![0u8; 2048];
        let (ct, body) = multipart_body(&[], Some(file));

        let err = read_multipart_form(multipart_from(&ct, body), "image", 1024)
            .await
            .unwrap_err();

        assert_eq!(err, MultipartFormError::FileTooLarge { limit: 1024 });
        assert_eq!(err.to_response().status(), 413);
    }

    #[actix_web::test]
    async fn test_empty_file_part_counts_as_no_file() {
        let mut file = MultipartFile::png("image", "");
        file.bytes.clear();
        let (ct, body) = multipart_body(&[("title", "x")], Some(file));

        let form = read_multipart_form(multipart_from(&ct, body), "image", 1024)
            .await
            .unwrap();
        assert!(!form.has_file());
    }

    #[actix_web::test]
    async fn test_file_under_other_field_name_is_ignored() {
        let (ct, body) = multipart_body(&[], Some(MultipartFile::png("avatar", "a.png")));

        let form = read_multipart_form(multipart_from(&ct, body), "image", 1024)
            .await
            .unwrap();
        assert!(!form.has_file());
    }

    #[actix_web::test]
    async fn test_non_multipart_body_is_malformed() {
        let result = read_multipart_form(
            multipart_from("application/json", b"{}".to_vec()),
            "image",
            1024,
        )
        .await;

        let err = result.unwrap_err();
        assert!(matches!(err, MultipartFormError::Malformed(_)));
        assert_eq!(err.to_response().status(), 400);
    }

    #[actix_web::test]
    async fn test_media_error_mapping() {
        assert_eq!(
            media_error_response(&MediaStoreError::Rejected(UploadPolicyError::UnsupportedType))
                .status(),
            400
        );
        assert_eq!(
            media_error_response(&MediaStoreError::Rejected(UploadPolicyError::FileTooLarge {
                limit: 1
            }))
            .status(),
            413
        );
    }
}
