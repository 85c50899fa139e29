//! Configuration-related errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading relay configuration.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("Failed to read config file {path}: {message}")]
    Io { path: String, message: String },

    /// Configuration file is not valid JSON for the expected shape.
    #[error("Failed to parse config file {path}: {message}")]
    Parse { path: String, message: String },

    /// A URL field is not a valid absolute URL.
    #[error("Invalid URL for {field}: {value}")]
    InvalidUrl { field: String, value: String },

    /// A field required to serve requests is unset or blank.
    #[error("Missing required setting {field}")]
    Missing { field: String },
}
