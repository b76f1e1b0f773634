use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

use super::storage_selector::CloudinaryCredentials;
use crate::media::application::domain::entities::{
    ImageInfo, StorageKind, UploadDescriptor, UploadedFile,
};
use crate::media::application::domain::policies::UploadPolicy;
use crate::media::application::ports::outgoing::{
    DeleteOutcome, SaveRequest, StorageBackend, StorageError,
};

const API_BASE: &str = "https://api.cloudinary.com/v1_1";

/// Upload parameters fixed when the backend is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadParams {
    pub folder: String,
    pub allowed_formats: Vec<String>,
}

impl UploadParams {
    pub fn new(folder: impl Into<String>) -> Self {
        Self {
            folder: folder.into(),
            allowed_formats: UploadPolicy::DEFAULT_ALLOWED_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Subset of the upload API response we rely on.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct CloudinaryUpload {
    pub public_id: Option<String>,
    pub secure_url: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DestroyResponse {
    result: String,
}

/// Signs request parameters: `k=v` pairs sorted by key, joined with `&`,
/// followed by the API secret, hashed with SHA-256.
pub fn sign_params(params: &BTreeMap<&str, String>, api_secret: &str) -> String {
    let to_sign = params
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha256::new();
    hasher.update(to_sign.as_bytes());
    hasher.update(api_secret.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Seam over the HTTP API so the backend can be tested without network.
#[async_trait]
pub trait CloudinaryClient: Send + Sync {
    async fn upload(
        &self,
        bytes: Vec<u8>,
        file_name: &str,
        params: &UploadParams,
    ) -> Result<CloudinaryUpload, String>;

    /// Returns the API's `result` field (`"ok"`, `"not found"`, ...).
    async fn destroy(&self, public_id: &str) -> Result<String, String>;
}

/// Production client speaking to the Cloudinary upload API.
#[derive(Clone)]
pub struct HttpCloudinaryClient {
    http: reqwest::Client,
    credentials: CloudinaryCredentials,
}

impl HttpCloudinaryClient {
    pub fn new(credentials: CloudinaryCredentials) -> Self {
        Self {
            http: reqwest::Client::new(),
            credentials,
        }
    }

    fn endpoint(&self, action: &str) -> String {
        format!(
            "{}/{}/image/{}",
            API_BASE, self.credentials.cloud_name, action
        )
    }

    fn signed_form(&self, params: BTreeMap<&str, String>) -> reqwest::multipart::Form {
        let signature = sign_params(&params, &self.credentials.api_secret);

        params
            .into_iter()
            .fold(reqwest::multipart::Form::new(), |form, (k, v)| {
                form.text(k.to_string(), v)
            })
            .text("api_key", self.credentials.api_key.clone())
            .text("signature", signature)
            .text("signature_algorithm", "sha256")
    }

    async fn send(&self, action: &str, form: reqwest::multipart::Form) -> Result<reqwest::Response, String> {
        let resp = self
            .http
            .post(self.endpoint(action))
            .multipart(form)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(format!("{action} failed ({status}): {body}"));
        }
        Ok(resp)
    }
}

#[async_trait]
impl CloudinaryClient for HttpCloudinaryClient {
    async fn upload(
        &self,
        bytes: Vec<u8>,
        file_name: &str,
        params: &UploadParams,
    ) -> Result<CloudinaryUpload, String> {
        let mut signed = BTreeMap::new();
        signed.insert("allowed_formats", params.allowed_formats.join(","));
        signed.insert("folder", params.folder.clone());
        signed.insert("timestamp", Utc::now().timestamp().to_string());

        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = self.signed_form(signed).part("file", part);

        let resp = self.send("upload", form).await?;
        resp.json::<CloudinaryUpload>()
            .await
            .map_err(|e| e.to_string())
    }

    async fn destroy(&self, public_id: &str) -> Result<String, String> {
        let mut signed = BTreeMap::new();
        signed.insert("public_id", public_id.to_string());
        signed.insert("timestamp", Utc::now().timestamp().to_string());

        let resp = self.send("destroy", self.signed_form(signed)).await?;
        resp.json::<DestroyResponse>()
            .await
            .map(|r| r.result)
            .map_err(|e| e.to_string())
    }
}

/// Remote backend. Every upload goes to the configured folder regardless of
/// the requested asset folder.
#[derive(Clone)]
pub struct CloudinaryBackend {
    client: Arc<dyn CloudinaryClient>,
    params: UploadParams,
}

impl CloudinaryBackend {
    pub fn new(credentials: CloudinaryCredentials, folder: impl Into<String>) -> Self {
        Self::with_client(
            Arc::new(HttpCloudinaryClient::new(credentials)),
            UploadParams::new(folder),
        )
    }

    pub fn with_client(client: Arc<dyn CloudinaryClient>, params: UploadParams) -> Self {
        Self { client, params }
    }

    pub fn params(&self) -> &UploadParams {
        &self.params
    }
}

#[async_trait]
impl StorageBackend for CloudinaryBackend {
    fn kind(&self) -> StorageKind {
        StorageKind::Remote
    }

    async fn save(
        &self,
        file: &UploadedFile,
        request: &SaveRequest,
    ) -> Result<UploadDescriptor, StorageError> {
        let file_name = format!("{}.{}", request.name_hint, request.extension);
        let upload = self
            .client
            .upload(file.bytes.clone(), &file_name, &self.params)
            .await
            .map_err(StorageError::Remote)?;

        debug!(public_id = ?upload.public_id, "Uploaded image to remote storage");

        Ok(UploadDescriptor {
            backend: StorageKind::Remote,
            path: upload.url,
            secure_url: upload.secure_url,
            filename: upload.public_id.clone(),
            public_id: upload.public_id,
            local_prefix: request.folder.public_prefix().to_string(),
        })
    }

    async fn delete(&self, asset: &ImageInfo) -> Result<DeleteOutcome, StorageError> {
        let Some(public_id) = asset.image_public_id.as_deref() else {
            return Ok(DeleteOutcome::Skipped);
        };

        let result = self
            .client
            .destroy(public_id)
            .await
            .map_err(StorageError::Remote)?;

        match result.as_str() {
            "ok" => Ok(DeleteOutcome::Deleted),
            "not found" => Ok(DeleteOutcome::NotFound),
            other => Err(StorageError::Delete(format!(
                "unexpected destroy result '{other}' for {public_id}"
            ))),
        }
    }
}
