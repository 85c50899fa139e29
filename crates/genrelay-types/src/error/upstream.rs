//! Upstream generation API errors.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use thiserror::Error;

/// Errors that can occur when calling the upstream generation API.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum UpstreamError {
    /// Upstream answered with a non-success status.
    #[error("Upstream returned HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The request never produced a response (DNS, TLS, connection reset).
    #[error("Upstream request failed: {message}")]
    Transport { message: String },

    /// Upstream answered 2xx with a body that is not a generation result.
    #[error("Invalid upstream response: {message}")]
    InvalidResponse { message: String },

    /// The model identifier cannot be placed in an upstream URL.
    #[error("Invalid model identifier: {model}")]
    InvalidModel { model: String },
}

impl UpstreamError {
    /// Message suitable for passing back to a caller for diagnostics.
    pub fn message(&self) -> Cow<'_, str> {
        match self {
            Self::Http { message, .. }
            | Self::Transport { message }
            | Self::InvalidResponse { message } => Cow::Borrowed(message),
            Self::InvalidModel { .. } => Cow::Owned(self.to_string()),
        }
    }

    /// Check if this error was caused by the caller's input rather than upstream.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidModel { .. })
    }
}
