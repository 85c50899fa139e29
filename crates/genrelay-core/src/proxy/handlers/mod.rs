// Handlers module - API endpoint handlers

pub mod relay;

pub use relay::handle_call_gemini;
