//! Domain models.

mod credential;
mod pcm;
mod wave;

pub use credential::UpstreamCredential;
pub use pcm::PcmBuffer;
pub use wave::WaveContainer;

use serde::{Deserialize, Serialize};

/// Caller identity returned by a successful token verification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerifiedIdentity {
    pub subject: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
