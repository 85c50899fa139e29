//! # genrelay Core
//!
//! Core logic for genrelay.
//!
//! ```text
//! genrelay-core/src/
//! ├── proxy/        # /callGemini relay: auth, identity, upstream, handler
//! ├── audio/        # PCM decoding and WAVE container encoding
//! └── config.rs     # config file, env overrides, credential resolution
//! ```

#![cfg_attr(
    test,
    allow(clippy::panic, clippy::float_cmp, clippy::unwrap_used, clippy::expect_used)
)]

pub mod audio;
pub mod config;
pub mod proxy;

pub use audio::{encode_wav, encode_wav_all};
pub use config::{resolve_credential, RelayConfig};
pub use proxy::{build_relay_router, RelayError, RelayState};
