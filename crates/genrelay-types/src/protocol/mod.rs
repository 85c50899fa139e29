//! Wire types for the relay HTTP contract.

pub mod generation;

pub use generation::{ErrorBody, GenerationRequest, GenerationResult};
