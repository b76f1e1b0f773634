use std::path::PathBuf;

use crate::config::{AppConfig, RuntimeEnv};

const BOUNDARY: &str = "----portfolio-test-boundary";

/// First bytes of a PNG file. Content is never decoded, only stored.
const PNG_BYTES: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52,
];

#[derive(Debug, Clone)]
pub struct MultipartFile {
    pub field_name: String,
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl MultipartFile {
    pub fn png(field_name: &str, file_name: &str) -> Self {
        Self {
            field_name: field_name.to_string(),
            file_name: file_name.to_string(),
            content_type: "image/png".to_string(),
            bytes: PNG_BYTES.to_vec(),
        }
    }
}

/// Encodes text fields and an optional file as `multipart/form-data`.
/// Returns the Content-Type header value and the body.
pub fn multipart_body(fields: &[(&str, &str)], file: Option<MultipartFile>) -> (String, Vec<u8>) {
    let mut body = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
        );
        body.extend_from_slice(value.as_bytes());
        body.extend_from_slice(b"\r\n");
    }

    if let Some(file) = file {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                file.field_name, file.file_name
            )
            .as_bytes(),
        );
        body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", file.content_type).as_bytes());
        body.extend_from_slice(&file.bytes);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    (format!("multipart/form-data; boundary={BOUNDARY}"), body)
}

pub fn test_app_config() -> AppConfig {
    AppConfig {
        env: RuntimeEnv::Test,
        host: "127.0.0.1".to_string(),
        port: 5000,
        database_url: "postgres://localhost/portfolio_test".to_string(),
        public_dir: PathBuf::from("/nonexistent/public"),
        frontend_dir: PathBuf::from("/nonexistent/frontend/out"),
        run_migrations: false,
    }
}
