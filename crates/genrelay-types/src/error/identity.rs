//! Identity verification errors.
//!
//! Every variant means "reject the caller"; the distinction only exists for
//! server-side logs.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum IdentityError {
    /// The provider rejected the token or returned unusable claims.
    #[error("Invalid token: {reason}")]
    Invalid { reason: String },

    /// The token's expiry is in the past.
    #[error("Token expired at {expired_at}")]
    Expired { expired_at: u64 },

    /// The token was issued for another audience.
    #[error("Token audience mismatch: {audience}")]
    AudienceMismatch { audience: String },

    /// The identity provider could not be reached.
    #[error("Identity provider unavailable: {message}")]
    Transport { message: String },
}
