#![doc = include_str!("../README.md")]

mod client;
mod error;
mod speech;
mod types;

pub use client::GenRelayClient;
pub use error::ClientError;
pub use speech::{find_inline_audio, synthesize_speech, InlineAudio};
pub use types::*;
