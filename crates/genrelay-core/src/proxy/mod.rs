//! Relay module - authenticated pass-through to the upstream generation API
//!
//! - `middleware/` bearer-token gate and CORS
//! - `identity/`   token verification against the identity provider
//! - `upstream/`   Gemini REST client and request/response mapping
//! - `handlers/`   the `/callGemini` endpoint

pub mod common;
pub mod error;
pub mod handlers;
pub mod identity;
pub mod middleware;
pub mod server;
pub mod upstream;

pub use error::{RelayError, UnauthorizedReason};
pub use identity::{IdentityVerifier, TokenInfoVerifier};
pub use server::{build_relay_router, RelayState, RELAY_PATH};
pub use upstream::{GeminiUpstream, GenerationUpstream};
