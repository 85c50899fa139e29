//! # genrelay Types
//!
//! Core types, models, and error definitions shared by the genrelay crates.
//!
//! - **`error`** - Typed errors for audio, identity, upstream and configuration
//! - **`models`** - Domain models (PCM buffers, WAVE containers, credentials, identities)
//! - **`protocol`** - Generation request/response wire types
//!
//! ## Architecture Role
//!
//! ```text
//!                genrelay-types (this crate)
//!                        │
//!              ┌─────────┴─────────┐
//!              ▼                   ▼
//!        genrelay-core      genrelay-client
//!              │
//!              ▼
//!        genrelay-server
//! ```

pub mod error;
pub mod models;
pub mod protocol;

pub use error::{AudioError, ConfigError, IdentityError, UpstreamError};

pub use models::{PcmBuffer, UpstreamCredential, VerifiedIdentity, WaveContainer};
pub use protocol::{ErrorBody, GenerationRequest, GenerationResult};
