use async_trait::async_trait;
use reqwest::{header, Client};
use serde_json::Value;

use super::mapping::{build_generate_body, extract_result, is_valid_model_id, upstream_error_message};
use super::GenerationUpstream;
use genrelay_types::{GenerationRequest, GenerationResult, UpstreamCredential, UpstreamError};

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

const API_KEY_HEADER: &str = "x-goog-api-key";

pub fn build_url(base_url: &str, model: &str, method: &str) -> String {
    format!("{}/models/{}:{}", base_url.trim_end_matches('/'), model, method)
}

/// Client for the public Gemini `generateContent` REST endpoint.
///
/// The credential travels in a header, never in the URL, so transport
/// errors (which embed the URL) cannot leak it.
pub struct GeminiUpstream {
    http_client: Client,
    base_url: String,
}

impl GeminiUpstream {
    /// Accepts a pre-built `reqwest::Client` so the caller owns timeouts and TLS setup.
    pub fn new(http_client: Client, base_url: impl Into<String>) -> Self {
        Self { http_client, base_url: base_url.into() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl GenerationUpstream for GeminiUpstream {
    async fn generate(
        &self,
        credential: &UpstreamCredential,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, UpstreamError> {
        if !is_valid_model_id(&request.model) {
            return Err(UpstreamError::InvalidModel { model: request.model.clone() });
        }

        let url = build_url(&self.base_url, &request.model, "generateContent");
        let body = build_generate_body(request);

        tracing::debug!("Forwarding generateContent for model {}", request.model);

        let response = self
            .http_client
            .post(&url)
            .header(header::CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, credential.expose())
            .json(&body)
            .send()
            .await
            .map_err(|e| UpstreamError::Transport { message: e.to_string() })?;

        let status = response.status();
        if !status.is_success() {
            let raw = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            return Err(UpstreamError::Http {
                status: status.as_u16(),
                message: upstream_error_message(&raw),
            });
        }

        let payload: Value = response.json().await.map_err(|e| UpstreamError::InvalidResponse {
            message: format!("failed to parse response: {}", e),
        })?;

        if !payload.is_object() {
            return Err(UpstreamError::InvalidResponse {
                message: "response body is not a JSON object".to_string(),
            });
        }

        Ok(extract_result(&payload))
    }
}
