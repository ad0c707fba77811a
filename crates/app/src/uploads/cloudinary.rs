//! Cloudinary unsigned upload client.

use std::path::Path;

use reqwest::{
    Client,
    multipart::{Form, Part},
};
use serde_json::Value;
use tracing::debug;

use crate::{config::UploadsConfig, uploads::UploadError};

/// Parsed JSON returned by the upload endpoint, success or not.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadResponse(Value);

impl UploadResponse {
    /// The raw JSON document.
    pub fn json(&self) -> &Value {
        &self.0
    }

    /// Unwrap into the raw JSON document.
    #[must_use]
    pub fn into_json(self) -> Value {
        self.0
    }

    /// HTTPS URL of the stored asset, present on success.
    pub fn secure_url(&self) -> Option<&str> {
        self.0.get("secure_url").and_then(Value::as_str)
    }

    /// Error message reported by the media service, present on failure.
    pub fn error_message(&self) -> Option<&str> {
        self.0.pointer("/error/message").and_then(Value::as_str)
    }
}

/// Forwards image blobs to the hosted upload endpoint with a fixed upload preset.
#[derive(Debug, Clone)]
pub struct ImageUploader {
    endpoint: String,
    upload_preset: String,
    http: Client,
}

impl ImageUploader {
    /// Create an uploader for the configured cloud.
    #[must_use]
    pub fn new(config: &UploadsConfig) -> Self {
        Self::with_endpoint(config.upload_url(), config.upload_preset.clone())
    }

    /// Create an uploader posting to an explicit endpoint.
    pub fn with_endpoint(endpoint: impl Into<String>, upload_preset: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            upload_preset: upload_preset.into(),
            http: Client::new(),
        }
    }

    /// Upload an image blob.
    ///
    /// The response body is returned as-is whatever the status code; callers inspect it to
    /// detect failure.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or when the body is not JSON.
    pub async fn upload_image(
        &self,
        image: Vec<u8>,
        file_name: impl Into<String>,
    ) -> Result<UploadResponse, UploadError> {
        let form = Form::new()
            .part("file", Part::bytes(image).file_name(file_name.into()))
            .text("upload_preset", self.upload_preset.clone());

        debug!(endpoint = %self.endpoint, "uploading image");

        let response = self.http.post(&self.endpoint).multipart(form).send().await?;

        Ok(UploadResponse(response.json().await?))
    }

    /// Read an image from disk and upload it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the upload fails.
    pub async fn upload_file(&self, path: &Path) -> Result<UploadResponse, UploadError> {
        let image = tokio::fs::read(path).await?;

        let file_name = path
            .file_name()
            .map_or_else(|| "image".to_string(), |name| name.to_string_lossy().into_owned());

        self.upload_image(image, file_name).await
    }
}
