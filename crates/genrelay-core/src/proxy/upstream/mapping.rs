//! Mapping between the relay's `{model, contents, config}` shape and the
//! `generateContent` REST body.

use genrelay_types::{GenerationRequest, GenerationResult};
use serde_json::{json, Map, Value};

/// `config` keys that live at the top level of the REST body rather than
/// inside `generationConfig`.
const TOP_LEVEL_CONFIG_KEYS: &[&str] =
    &["systemInstruction", "tools", "toolConfig", "safetySettings", "cachedContent", "labels"];

/// Build the `generateContent` body for `request`.
pub fn build_generate_body(request: &GenerationRequest) -> Value {
    let mut body = Map::new();
    body.insert("contents".to_string(), normalize_contents(&request.contents));

    let mut generation_config = Map::new();
    if let Value::Object(config) = request.config_or_default() {
        for (key, value) in config {
            if TOP_LEVEL_CONFIG_KEYS.contains(&key.as_str()) {
                let value = if key == "systemInstruction" {
                    normalize_system_instruction(&value)
                } else {
                    value
                };
                body.insert(key, value);
            } else {
                generation_config.insert(key, value);
            }
        }
    }
    if !generation_config.is_empty() {
        body.insert("generationConfig".to_string(), Value::Object(generation_config));
    }

    Value::Object(body)
}

/// Accept the shorthand forms callers send and produce a `Content[]` array.
///
/// - `"hi"` → one user turn with one text part
/// - `{parts: [...]}` → one-element array
/// - `["a", "b"]` → one user turn with a text part per string
/// - anything else is forwarded unchanged
pub fn normalize_contents(contents: &Value) -> Value {
    match contents {
        Value::String(text) => json!([{"role": "user", "parts": [{"text": text}]}]),
        Value::Object(obj) if obj.contains_key("parts") => Value::Array(vec![contents.clone()]),
        Value::Array(items) if !items.is_empty() && items.iter().all(Value::is_string) => {
            let parts: Vec<Value> = items.iter().map(|text| json!({"text": text})).collect();
            json!([{"role": "user", "parts": parts}])
        },
        _ => contents.clone(),
    }
}

fn normalize_system_instruction(value: &Value) -> Value {
    match value {
        Value::String(text) => json!({"parts": [{"text": text}]}),
        other => other.clone(),
    }
}

/// Lift the fields the relay returns out of a raw `generateContent` response.
pub fn extract_result(response: &Value) -> GenerationResult {
    let candidates = response.get("candidates").filter(|c| !c.is_null()).cloned();
    let usage_metadata = response.get("usageMetadata").filter(|u| !u.is_null()).cloned();
    let text = candidates.as_ref().and_then(first_candidate_text);

    GenerationResult { text, candidates, usage_metadata }
}

/// Concatenated text parts of the first candidate, skipping thought parts.
fn first_candidate_text(candidates: &Value) -> Option<String> {
    let parts = candidates.get(0)?.get("content")?.get("parts")?.as_array()?;

    let mut text = String::new();
    let mut found = false;
    for part in parts {
        if part.get("thought").and_then(Value::as_bool).unwrap_or(false) {
            continue;
        }
        if let Some(fragment) = part.get("text").and_then(Value::as_str) {
            text.push_str(fragment);
            found = true;
        }
    }
    found.then_some(text)
}

/// Extract a readable message from an error response body.
pub fn upstream_error_message(raw_body: &str) -> String {
    serde_json::from_str::<Value>(raw_body)
        .ok()
        .and_then(|v| v.get("error")?.get("message")?.as_str().map(str::to_string))
        .unwrap_or_else(|| raw_body.trim().to_string())
}

/// Model ids are placed in the URL path; reject anything that could alter it.
pub fn is_valid_model_id(model: &str) -> bool {
    !model.is_empty()
        && !model
            .chars()
            .any(|c| c == '/' || c == '?' || c == '#' || c == '%' || c.is_whitespace())
        && model != "."
        && model != ".."
}
