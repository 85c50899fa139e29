//! Typed error definitions for genrelay.
//!
//! Each domain has its own error enum.

mod audio;
mod config;
mod identity;
mod upstream;

pub use audio::AudioError;
pub use config::ConfigError;
pub use identity::IdentityError;
pub use upstream::UpstreamError;
