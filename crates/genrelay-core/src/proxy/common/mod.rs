pub mod sanitize_error;

pub use sanitize_error::sanitize_upstream_message;
