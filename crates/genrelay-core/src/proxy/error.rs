//! Relay boundary errors.
//!
//! Every failure on the relay path ends up here and is rendered as a JSON
//! `ErrorBody`; nothing propagates as an unhandled fault.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use genrelay_types::ErrorBody;
use thiserror::Error;

/// Why a request was rejected as unauthenticated. Only ever logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnauthorizedReason {
    NoToken,
    InvalidToken,
}

impl UnauthorizedReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NoToken => "no token",
            Self::InvalidToken => "invalid token",
        }
    }
}

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Unauthorized ({})", reason.as_str())]
    Unauthorized { reason: UnauthorizedReason },

    #[error("Missing required parameters: model and contents")]
    BadRequest,

    #[error("API key not configured")]
    Configuration,

    #[error("Failed to call Gemini API: {message}")]
    Upstream { message: String },
}

impl RelayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::Configuration | Self::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing body. Unauthorized is uniform regardless of reason.
    pub fn to_body(&self) -> ErrorBody {
        match self {
            Self::MethodNotAllowed => ErrorBody::new("Method Not Allowed"),
            Self::Unauthorized { .. } => ErrorBody::new("Unauthorized"),
            Self::BadRequest => ErrorBody::new("Missing required parameters: model and contents"),
            Self::Configuration => ErrorBody::new("API key not configured"),
            Self::Upstream { message } => {
                ErrorBody::new("Failed to call Gemini API").with_message(message.clone())
            },
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.to_body())).into_response()
    }
}
