//! `POST /callGemini`: forward an authenticated generation request upstream.

use axum::{
    body::Bytes,
    extract::State,
    http::Method,
    Extension, Json,
};
use genrelay_types::{GenerationRequest, GenerationResult, VerifiedIdentity};
use tracing::{error, info, warn};

use crate::proxy::common::sanitize_upstream_message;
use crate::proxy::error::{RelayError, UnauthorizedReason};
use crate::proxy::server::RelayState;

/// Checks run in order and each failure short-circuits: method, identity
/// (set by the auth middleware), credential, payload, then a single
/// upstream attempt.
pub async fn handle_call_gemini(
    State(state): State<RelayState>,
    method: Method,
    identity: Option<Extension<VerifiedIdentity>>,
    body: Bytes,
) -> Result<Json<GenerationResult>, RelayError> {
    if method != Method::POST {
        return Err(RelayError::MethodNotAllowed);
    }

    let Some(Extension(identity)) = identity else {
        error!("Relay route reached without an authenticated identity");
        return Err(RelayError::Unauthorized { reason: UnauthorizedReason::InvalidToken });
    };

    let Some(credential) = state.credential.as_ref() else {
        error!("Upstream API key is not configured (set GEMINI_API_KEY or api_key_file)");
        return Err(RelayError::Configuration);
    };

    let Some(request) = GenerationRequest::from_json_slice(&body) else {
        warn!("Rejecting request from {}: missing model or contents", identity.subject);
        return Err(RelayError::BadRequest);
    };

    info!("[Relay] subject={} model={}", identity.subject, request.model);

    match state.upstream.generate(credential, &request).await {
        Ok(result) => {
            info!(
                "[Relay] model={} completed (text={}, usage={})",
                request.model,
                result.text.is_some(),
                result.usage_metadata.is_some()
            );
            Ok(Json(result))
        },
        Err(e) => {
            let message = sanitize_upstream_message(&e.message(), credential);
            if e.is_client_error() {
                warn!("[Relay] model={} rejected before forwarding: {}", request.model, message);
            } else {
                error!("[Relay] model={} upstream call failed: {}", request.model, message);
            }
            Err(RelayError::Upstream { message })
        },
    }
}
