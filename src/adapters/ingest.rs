use crate::config::toml_config::UploadConfig;
use crate::core::LineSink;
use crate::utils::error::{EtlError, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;

/// Posts the encoded lines to the text-ingestion endpoint.
#[derive(Debug, Clone)]
pub struct IngestClient {
    client: Client,
    endpoint: String,
}

impl IngestClient {
    pub fn new(upload: &UploadConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(upload.timeout_seconds()))
            .build()?;

        Ok(Self {
            client,
            endpoint: upload.endpoint.clone(),
        })
    }
}

impl LineSink for IngestClient {
    async fn submit(&self, payload: &str) -> Result<()> {
        tracing::debug!("📤 Uploading {} bytes to: {}", payload.len(), self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(payload.to_string())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(EtlError::UploadError {
                status: response.status().as_u16(),
            });
        }

        Ok(())
    }
}

/// Prints payloads instead of uploading them.
#[derive(Debug, Clone, Default)]
pub struct DryRunSink;

impl LineSink for DryRunSink {
    async fn submit(&self, payload: &str) -> Result<()> {
        tracing::info!("🔍 DRY RUN - payload not uploaded");
        println!("{}", payload);
        Ok(())
    }
}
