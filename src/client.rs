use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{info, warn};

use crate::models::{GenerateRequest, GenerationResult, TrendingElement, TrendingPayload};

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("HTTP error: {0}")] Http(String),
    #[error("status={0} body={1}")] Status(StatusCode, String),
    #[error("decode error: {0}")] Decode(String),
}

/// The remote generation service, as seen by the shell.
#[async_trait]
pub trait VideoBackend: Send + Sync {
    async fn generate_video(&self, prompt: &str) -> Result<GenerationResult, BackendError>;
    async fn trending_elements(&self) -> Result<Vec<TrendingElement>, BackendError>;
}

pub struct ViralCraftClient {
    client: Client,
    base_url: String,
}

impl ViralCraftClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn read_body(response: reqwest::Response) -> Result<String, BackendError> {
        let status = response.status();
        let body = response.text().await.map_err(|e| BackendError::Http(e.to_string()))?;
        if !status.is_success() {
            return Err(BackendError::Status(status, body));
        }
        Ok(body)
    }
}

#[async_trait]
impl VideoBackend for ViralCraftClient {
    async fn generate_video(&self, prompt: &str) -> Result<GenerationResult, BackendError> {
        let url = format!("{}/api/generate-video", self.base_url);
        info!("🔗 Requesting generation from: {}", url);

        let response = self.client
            .post(&url)
            .json(&GenerateRequest { prompt: prompt.to_string() })
            .send()
            .await
            .map_err(|e| BackendError::Http(e.to_string()))?;

        info!("📥 Generation response status: {}", response.status());
        let body = Self::read_body(response).await?;

        serde_json::from_str(&body).map_err(|e| {
            warn!("❌ Generation payload rejected: {}", e);
            BackendError::Decode(e.to_string())
        })
    }

    async fn trending_elements(&self) -> Result<Vec<TrendingElement>, BackendError> {
        let url = format!("{}/api/trending-elements", self.base_url);
        let response = self.client
            .get(&url)
            .send()
            .await
            .map_err(|e| BackendError::Http(e.to_string()))?;

        let body = Self::read_body(response).await?;
        let payload: TrendingPayload = serde_json::from_str(&body)
            .map_err(|e| BackendError::Decode(e.to_string()))?;
        Ok(payload.into_elements())
    }
}
