//! Upstream error sanitization.
//!
//! Upstream messages are passed back to callers for diagnostics, so any
//! occurrence of the server-held credential is replaced before it leaves
//! the relay. The raw message is only logged server-side.

use genrelay_types::UpstreamCredential;

const REDACTED: &str = "[REDACTED]";
const MAX_MESSAGE_CHARS: usize = 2_000;

/// Strip the credential from `message` and cap its length.
pub fn sanitize_upstream_message(message: &str, credential: &UpstreamCredential) -> String {
    let secret = credential.expose();
    let redacted = if secret.is_empty() {
        message.to_string()
    } else {
        message.replace(secret, REDACTED)
    };

    if redacted.chars().count() <= MAX_MESSAGE_CHARS {
        return redacted;
    }
    let mut truncated: String = redacted.chars().take(MAX_MESSAGE_CHARS).collect();
    truncated.push_str("...");
    truncated
}
