// Middleware module - Axum middleware

pub mod auth;
pub mod cors;

pub use auth::{bearer_token, relay_auth_middleware};
pub use cors::cors_layer;
