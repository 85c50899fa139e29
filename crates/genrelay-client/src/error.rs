//! Error types for the genrelay client.

use genrelay_types::{AudioError, UpstreamError};
use thiserror::Error;

/// Errors that can occur when using the genrelay client.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request to the relay failed.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The relay answered with a non-success status.
    #[error("Relay error ({status}): {message}")]
    Relay {
        /// HTTP status code.
        status: u16,
        /// `error` and `message` fields of the relay's error body.
        message: String,
    },

    /// Direct call to the upstream API failed.
    #[error("Upstream error: {0}")]
    Upstream(#[from] UpstreamError),

    /// Server returned an invalid or unparseable response.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Client was configured without a usable credential.
    #[error("Missing credential: {0}")]
    MissingCredential(&'static str),

    /// The generation result carried no inline PCM audio.
    #[error("No audio in generation result")]
    NoAudio,

    #[error("Audio error: {0}")]
    Audio(#[from] AudioError),
}
