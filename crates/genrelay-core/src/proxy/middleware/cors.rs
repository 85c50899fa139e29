// CORS middleware
use tower_http::cors::{Any, CorsLayer};

/// The relay is open to browser callers from any origin; access control is
/// the bearer token alone.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .allow_credentials(false)
        .max_age(std::time::Duration::from_secs(3600))
}
