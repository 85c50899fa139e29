//! Generation request/response bodies exchanged with the relay.
//!
//! `contents`, `config` and `candidates` are opaque JSON so the relay keeps
//! working as the upstream API grows new fields.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A caller's generation request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationRequest {
    pub model: String,
    pub contents: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Value>,
}

impl GenerationRequest {
    pub fn new(model: impl Into<String>, contents: Value) -> Self {
        Self { model: model.into(), contents, config: None }
    }

    pub fn with_config(mut self, config: Value) -> Self {
        self.config = Some(config);
        self
    }

    /// Parse a request body, returning `None` unless it is a JSON object with
    /// a non-empty string `model` and non-empty `contents`.
    pub fn from_json_slice(body: &[u8]) -> Option<Self> {
        let mut value: Value = serde_json::from_slice(body).ok()?;
        let object = value.as_object_mut()?;

        let model = match object.get("model") {
            Some(Value::String(model)) if !model.trim().is_empty() => model.clone(),
            _ => return None,
        };
        let contents = object.remove("contents").filter(|c| !is_blank(c))?;
        let config = object.remove("config").filter(|c| !c.is_null());

        Some(Self { model, contents, config })
    }

    /// The caller's options, or an empty object when none were sent.
    pub fn config_or_default(&self) -> Value {
        self.config.clone().unwrap_or_else(|| Value::Object(Map::new()))
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Result returned to the caller: upstream output passed through unchanged.
///
/// Absent fields are omitted from the serialized body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GenerationResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidates: Option<Value>,
    #[serde(rename = "usageMetadata", default, skip_serializing_if = "Option::is_none")]
    pub usage_metadata: Option<Value>,
}

/// JSON error body: `{ "error": ..., "message"?: ... }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into(), message: None }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}
