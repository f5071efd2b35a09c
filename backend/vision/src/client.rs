//! Google Cloud Vision text-detection client.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use textlens_core::{LensError, TextAnnotation, TextDetector};

use crate::credentials::ServiceAccountKey;
use crate::token::Authenticator;
use crate::wire::{BatchAnnotateRequest, BatchAnnotateResponse};

pub const DEFAULT_ENDPOINT: &str = "https://vision.googleapis.com";
pub const PROVIDER_NAME: &str = "google-vision";

/// Authenticated handle to the Vision API.
///
/// Constructed once at startup and shared; the embedded authenticator caches
/// bearer tokens across requests.
pub struct VisionClient {
    http: Client,
    auth: Authenticator,
    base_url: String,
}

impl VisionClient {
    pub fn new(key: ServiceAccountKey) -> Self {
        Self {
            http: Client::new(),
            auth: Authenticator::new(key),
            base_url: DEFAULT_ENDPOINT.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

fn provider_error(message: impl Into<String>) -> LensError {
    LensError::Provider {
        provider: PROVIDER_NAME.to_string(),
        message: message.into(),
    }
}

#[async_trait]
impl TextDetector for VisionClient {
    fn provider_name(&self) -> &str {
        PROVIDER_NAME
    }

    async fn detect_text(&self, image: &[u8]) -> Result<Vec<TextAnnotation>, LensError> {
        if image.is_empty() {
            return Err(LensError::EmptyUpload);
        }

        let token = self.auth.bearer_token().await?;
        let body = BatchAnnotateRequest::text_detection(image);

        debug!(bytes = image.len(), "sending text-detection request");
        let response = self
            .http
            .post(format!("{}/v1/images:annotate", self.base_url))
            .bearer_auth(&token)
            .json(&body)
            .send()
            .await
            .map_err(|e| provider_error(format!("HTTP request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(provider_error(format!(
                "annotate returned {status}: {body}"
            )));
        }

        let parsed: BatchAnnotateResponse = response
            .json()
            .await
            .map_err(|e| provider_error(format!("malformed annotate response: {e}")))?;

        let first = parsed.responses.into_iter().next().unwrap_or_default();
        if let Some(error) = first.error {
            return Err(provider_error(format!(
                "annotate failed (code {}): {}",
                error.code, error.message
            )));
        }

        Ok(first.text_annotations)
    }
}
