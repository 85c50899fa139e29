//! Caller identity verification.
//!
//! The relay never trusts a bearer token on its own: every request's token
//! is handed to an [`IdentityVerifier`] and any error rejects the caller.

mod tokeninfo;

pub use tokeninfo::{TokenInfoVerifier, DEFAULT_TOKENINFO_URL};

use async_trait::async_trait;
use genrelay_types::{IdentityError, VerifiedIdentity};

#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<VerifiedIdentity, IdentityError>;
}
