use crate::error::ClientError;
use crate::types::*;
use genrelay_core::proxy::upstream::{GeminiUpstream, GenerationUpstream};
use genrelay_types::{ErrorBody, GenerationRequest, GenerationResult, UpstreamCredential};
use reqwest::Client;
use std::time::Duration;

enum Backend {
    Direct { upstream: GeminiUpstream, credential: UpstreamCredential },
    Relay { relay_url: String, id_token: String },
}

pub struct GenRelayClient {
    client: Client,
    backend: Backend,
    config: ClientConfig,
}

impl GenRelayClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        let backend = match &config.mode {
            ClientMode::Direct { api_key, base_url } => {
                let credential = UpstreamCredential::new(api_key.as_str())
                    .ok_or(ClientError::MissingCredential("api_key is blank"))?;
                Backend::Direct {
                    upstream: GeminiUpstream::new(client.clone(), base_url.as_str()),
                    credential,
                }
            },
            ClientMode::Relay { relay_url, id_token } => {
                if id_token.trim().is_empty() {
                    return Err(ClientError::MissingCredential("id_token is blank"));
                }
                Backend::Relay { relay_url: relay_url.clone(), id_token: id_token.clone() }
            },
        };

        Ok(Self { client, backend, config })
    }

    /// Run one generation request. No retries are attempted.
    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, ClientError> {
        match &self.backend {
            Backend::Direct { upstream, credential } => {
                tracing::debug!("Direct generation with model {}", request.model);
                Ok(upstream.generate(credential, request).await?)
            },
            Backend::Relay { relay_url, id_token } => {
                tracing::debug!("Relayed generation with model {} via {}", request.model, relay_url);
                self.generate_via_relay(relay_url, id_token, request).await
            },
        }
    }

    async fn generate_via_relay(
        &self,
        relay_url: &str,
        id_token: &str,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, ClientError> {
        let resp = self
            .client
            .post(relay_url)
            .bearer_auth(id_token)
            .json(request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let raw = resp.text().await.unwrap_or_default();
            return Err(ClientError::Relay {
                status: status.as_u16(),
                message: relay_error_message(&raw),
            });
        }

        resp.json().await.map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

fn relay_error_message(raw: &str) -> String {
    match serde_json::from_str::<ErrorBody>(raw) {
        Ok(ErrorBody { error, message: Some(message) }) => format!("{}: {}", error, message),
        Ok(ErrorBody { error, message: None }) => error,
        Err(_) => raw.trim().to_string(),
    }
}
