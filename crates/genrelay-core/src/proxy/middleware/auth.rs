use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, Method},
    middleware::Next,
    response::Response,
};

use crate::proxy::error::{RelayError, UnauthorizedReason};
use crate::proxy::server::RelayState;

/// Bearer-token gate for the relay route.
///
/// Non-POST requests pass straight through so the handler can answer 405
/// before any verification happens. On success the [`VerifiedIdentity`]
/// is stored in the request extensions.
///
/// [`VerifiedIdentity`]: genrelay_types::VerifiedIdentity
pub async fn relay_auth_middleware(
    State(state): State<RelayState>,
    mut request: Request,
    next: Next,
) -> Result<Response, RelayError> {
    let method = request.method().clone();
    tracing::info!("Request: {} {}", method, request.uri().path());

    if method != Method::POST {
        return Ok(next.run(request).await);
    }

    let Some(token) = bearer_token(request.headers()).map(str::to_string) else {
        tracing::warn!("Rejecting request: {}", UnauthorizedReason::NoToken.as_str());
        return Err(RelayError::Unauthorized { reason: UnauthorizedReason::NoToken });
    };

    let identity = match state.verifier.verify(&token).await {
        Ok(identity) => identity,
        Err(e) => {
            tracing::warn!(
                "Rejecting request: {} ({})",
                UnauthorizedReason::InvalidToken.as_str(),
                e
            );
            return Err(RelayError::Unauthorized { reason: UnauthorizedReason::InvalidToken });
        },
    };

    tracing::debug!("Authenticated subject {}", identity.subject);
    request.extensions_mut().insert(identity);
    Ok(next.run(request).await)
}

/// Token from `Authorization: Bearer <token>`; scheme is case-insensitive.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
