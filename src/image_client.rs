use crate::gemini::{GeminiRequest, GeminiResponse};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum ImageModelError {
    #[error("request to image model failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("image model returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to decode image model response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The outbound generative model. One call per request, no retries.
#[async_trait]
pub trait ImageModel: Send + Sync {
    async fn generate_content(
        &self,
        api_key: &str,
        model: &str,
        request: &GeminiRequest,
    ) -> Result<GeminiResponse, ImageModelError>;
}

#[derive(Debug)]
pub struct GeminiClient {
    http_client: Arc<reqwest::Client>,
    api_base: String,
}

impl GeminiClient {
    pub fn new(http_client: Arc<reqwest::Client>, api_base: impl Into<String>) -> Self {
        Self {
            http_client,
            api_base: api_base.into(),
        }
    }

    fn build_target_url(&self, model: &str) -> String {
        let path = format!("models/{}:generateContent", model);
        if self.api_base.ends_with('/') {
            format!("{}{}", self.api_base, path)
        } else {
            format!("{}/{}", self.api_base, path)
        }
    }
}

#[async_trait]
impl ImageModel for GeminiClient {
    async fn generate_content(
        &self,
        api_key: &str,
        model: &str,
        request: &GeminiRequest,
    ) -> Result<GeminiResponse, ImageModelError> {
        let target_url = self.build_target_url(model);
        info!("Forwarding request to: {}", target_url);

        let response = self
            .http_client
            .post(&target_url)
            .header("x-goog-api-key", api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ImageModelError::Status {
                status: status.as_u16(),
                body,
            });
        }

        debug!("image model responded with {} bytes", body.len());
        Ok(serde_json::from_str(&body)?)
    }
}
