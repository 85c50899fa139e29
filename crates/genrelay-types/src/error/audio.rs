//! Audio buffer and container errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while building PCM buffers or encoding WAVE containers.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum AudioError {
    /// More frames were requested than the buffer holds.
    #[error("Requested {requested} frames but only {available} are available")]
    OutOfRange { requested: usize, available: usize },

    /// Buffer shape is invalid (zero sample rate, no channels, ragged channels).
    #[error("Invalid PCM buffer: {message}")]
    InvalidBuffer { message: String },

    /// Raw PCM input could not be decoded.
    #[error("Invalid PCM data: {message}")]
    InvalidPcm { message: String },

    /// A header field does not fit its on-disk width.
    #[error("WAVE header field {field} overflows")]
    HeaderOverflow { field: String },
}
