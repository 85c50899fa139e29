//! Wiring of the relay's shared components from configuration.

use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;

use genrelay_core::proxy::{GeminiUpstream, RelayState, TokenInfoVerifier};
use genrelay_core::{resolve_credential, RelayConfig};

/// Build the immutable relay state. A missing credential is not fatal; a
/// missing token audience is.
pub fn build_relay_state(config: &RelayConfig) -> Result<RelayState> {
    let audience = config.required_audience()?;

    let mut builder = reqwest::Client::builder();
    if let Some(secs) = config.request_timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    let http_client = builder.build()?;

    let verifier = TokenInfoVerifier::new(
        http_client.clone(),
        config.identity_verify_url.clone(),
        Some(audience.to_string()),
    );
    let upstream = GeminiUpstream::new(http_client, config.upstream_base_url.clone());
    let credential = resolve_credential(config, |key| std::env::var(key).ok());

    Ok(RelayState::new(Arc::new(verifier), Arc::new(upstream), credential))
}

#[cfg(test)]
mod tests {
    use super::*;
    use genrelay_types::ConfigError;

    fn serving_config() -> RelayConfig {
        RelayConfig { identity_audience: Some("my-project".to_string()), ..RelayConfig::default() }
    }

    #[test]
    fn test_build_relay_state_with_timeout() {
        let config = RelayConfig { request_timeout_secs: Some(5), ..serving_config() };
        assert!(build_relay_state(&config).is_ok());
    }

    #[test]
    fn test_default_config_refuses_to_serve_without_audience() {
        let err = build_relay_state(&RelayConfig::default()).err().unwrap();
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::Missing { field: "identity_audience".to_string() })
        );
    }

    #[test]
    fn test_config_key_takes_precedence() {
        let config = RelayConfig { api_key: Some("configured-key".to_string()), ..serving_config() };
        let state = build_relay_state(&config).unwrap();
        assert_eq!(state.credential.as_ref().map(|c| c.expose()), Some("configured-key"));
    }
}
