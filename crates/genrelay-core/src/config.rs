//! Relay configuration.
//!
//! Loaded once at process start: optional JSON file, then environment
//! overrides. The upstream credential is resolved through a fixed fallback
//! chain into a single `Option<UpstreamCredential>`.

use genrelay_types::{ConfigError, UpstreamCredential};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::proxy::identity::DEFAULT_TOKENINFO_URL;
use crate::proxy::upstream::DEFAULT_GEMINI_BASE_URL;

pub const DEFAULT_BODY_LIMIT_BYTES: usize = 32 * 1024 * 1024;

const ENV_UPSTREAM_URL: &str = "GENRELAY_UPSTREAM_URL";
const ENV_IDENTITY_URL: &str = "GENRELAY_IDENTITY_URL";
const ENV_IDENTITY_AUDIENCE: &str = "GENRELAY_IDENTITY_AUDIENCE";
const ENV_API_KEY_FILE: &str = "GEMINI_API_KEY_FILE";
/// Environment variables checked for the credential, in order.
const CREDENTIAL_ENV_VARS: &[&str] = &["GEMINI_API_KEY", "API_KEY"];

#[derive(Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RelayConfig {
    pub upstream_base_url: String,
    pub identity_verify_url: String,
    pub identity_audience: Option<String>,
    pub api_key: Option<String>,
    pub api_key_file: Option<PathBuf>,
    pub request_timeout_secs: Option<u64>,
    pub body_limit_bytes: usize,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            upstream_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            identity_verify_url: DEFAULT_TOKENINFO_URL.to_string(),
            identity_audience: None,
            api_key: None,
            api_key_file: None,
            request_timeout_secs: None,
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
        }
    }
}

impl fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayConfig")
            .field("upstream_base_url", &self.upstream_base_url)
            .field("identity_verify_url", &self.identity_verify_url)
            .field("identity_audience", &self.identity_audience)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("api_key_file", &self.api_key_file)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("body_limit_bytes", &self.body_limit_bytes)
            .finish()
    }
}

impl RelayConfig {
    /// Read a JSON config file; `None` yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load, apply process environment overrides and validate.
    pub fn from_file_and_env(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(url) = non_blank(ENV_UPSTREAM_URL) {
            self.upstream_base_url = url;
        }
        if let Some(url) = non_blank(ENV_IDENTITY_URL) {
            self.identity_verify_url = url;
        }
        if let Some(audience) = non_blank(ENV_IDENTITY_AUDIENCE) {
            self.identity_audience = Some(audience);
        }
        if self.api_key_file.is_none() {
            self.api_key_file = non_blank(ENV_API_KEY_FILE).map(PathBuf::from);
        }
    }

    /// Audience that verified tokens must carry. Serving without one would
    /// accept tokens minted for any client of the identity provider.
    pub fn required_audience(&self) -> Result<&str, ConfigError> {
        self.identity_audience
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .ok_or_else(|| ConfigError::Missing { field: "identity_audience".to_string() })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_url("upstream_base_url", &self.upstream_base_url)?;
        validate_url("identity_verify_url", &self.identity_verify_url)?;
        Ok(())
    }
}

fn validate_url(field: &str, value: &str) -> Result<(), ConfigError> {
    let invalid = || ConfigError::InvalidUrl { field: field.to_string(), value: value.to_string() };
    let url = url::Url::parse(value).map_err(|_| invalid())?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(invalid());
    }
    Ok(())
}

/// Resolve the upstream credential. First hit wins:
///
/// 1. `api_key` in the config file
/// 2. `GEMINI_API_KEY`, then `API_KEY`
/// 3. the file named by `api_key_file` / `GEMINI_API_KEY_FILE`
///
/// An unreadable key file is logged and treated as absent so the process
/// still starts; requests then fail with a configuration error.
pub fn resolve_credential<F>(config: &RelayConfig, lookup: F) -> Option<UpstreamCredential>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(credential) = config.api_key.as_deref().and_then(UpstreamCredential::new) {
        tracing::info!("Upstream API key loaded from config file");
        return Some(credential);
    }

    for &var in CREDENTIAL_ENV_VARS {
        if let Some(credential) = lookup(var).and_then(UpstreamCredential::new) {
            tracing::info!("Upstream API key loaded from {}", var);
            return Some(credential);
        }
    }

    if let Some(path) = config.api_key_file.as_ref() {
        match fs::read_to_string(path) {
            Ok(content) => {
                if let Some(credential) = UpstreamCredential::new(content) {
                    tracing::info!("Upstream API key loaded from {}", path.display());
                    return Some(credential);
                }
                tracing::warn!("API key file {} is empty", path.display());
            },
            Err(e) => {
                tracing::warn!("Failed to read API key file {}: {}", path.display(), e);
            },
        }
    }

    tracing::warn!("No upstream API key configured; relay requests will fail with 500");
    None
}
