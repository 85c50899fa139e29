//! Upstream generation API.

pub mod gemini;
pub mod mapping;

pub use gemini::{GeminiUpstream, DEFAULT_GEMINI_BASE_URL};

use async_trait::async_trait;
use genrelay_types::{GenerationRequest, GenerationResult, UpstreamCredential, UpstreamError};

/// A single generation call. Implementations must not retry.
#[async_trait]
pub trait GenerationUpstream: Send + Sync {
    async fn generate(
        &self,
        credential: &UpstreamCredential,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, UpstreamError>;
}
