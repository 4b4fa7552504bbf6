//! Error types for the JSON result responder

use core::fmt;

/// Responder error
///
/// Covers serialization failures and malformed result configurations.
/// None of these occur during normal negotiation; soft negotiation by
/// definition never errors.
#[derive(Debug)]
pub struct ResponderError(String);

impl fmt::Display for ResponderError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ResponderError {
    fn from(s: &str) -> Self {
        ResponderError(s.to_string())
    }
}

impl From<String> for ResponderError {
    fn from(s: String) -> Self {
        ResponderError(s)
    }
}

impl From<serde_json::Error> for ResponderError {
    fn from(e: serde_json::Error) -> Self {
        ResponderError(format!("{e}"))
    }
}

impl From<http::Error> for ResponderError {
    fn from(e: http::Error) -> Self {
        ResponderError(format!("{e}"))
    }
}

impl axum::response::IntoResponse for ResponderError {
    fn into_response(self) -> axum::response::Response {
        crate::conneg::logging::log_error(&format!("responder error: {self}"));
        (
            http::StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error",
        )
            .into_response()
    }
}

/// Result type alias for responder operations
pub type Result<T> = core::result::Result<T, ResponderError>;
