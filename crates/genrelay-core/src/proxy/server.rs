use axum::{middleware, routing::any, Router};
use genrelay_types::UpstreamCredential;
use std::sync::Arc;

use crate::proxy::handlers;
use crate::proxy::identity::IdentityVerifier;
use crate::proxy::middleware::relay_auth_middleware;
use crate::proxy::upstream::GenerationUpstream;

pub const RELAY_PATH: &str = "/callGemini";

/// Shared, read-only relay dependencies. Nothing here is mutated per request.
#[derive(Clone)]
pub struct RelayState {
    pub verifier: Arc<dyn IdentityVerifier>,
    pub upstream: Arc<dyn GenerationUpstream>,
    pub credential: Option<UpstreamCredential>,
}

impl RelayState {
    pub fn new(
        verifier: Arc<dyn IdentityVerifier>,
        upstream: Arc<dyn GenerationUpstream>,
        credential: Option<UpstreamCredential>,
    ) -> Self {
        Self { verifier, upstream, credential }
    }
}

/// Router with the relay endpoint. Every method is routed to the handler so
/// non-POST requests get the JSON 405 body instead of axum's empty one.
///
/// `any` installs the handler as the method router's fallback, which
/// `route_layer` does not wrap; `layer` covers it.
pub fn build_relay_router(state: RelayState) -> Router<()> {
    Router::new()
        .route(
            RELAY_PATH,
            any(handlers::handle_call_gemini)
                .layer(middleware::from_fn_with_state(state.clone(), relay_auth_middleware)),
        )
        .with_state(state)
}
