use std::time::SystemTime;

use http::StatusCode;
use scimd_core::ApiError;
use serde_json::{Map, Value};

/// Canonical error-response entity
///
/// Built fresh per failed request and discarded after serialization. The
/// entity itself is serialization-agnostic; wire encoding lives in
/// [`crate::wire`].
#[derive(Debug)]
pub struct ErrorResponse {
    /// Wire-stable error tag, or `GenericException` for unclassified failures
    pub error_name: &'static str,
    /// Moment of handling
    pub error_time: SystemTime,
    /// Localized message for domain errors, raw text otherwise
    pub message: Option<String>,
    /// Status carried both on the transport line and in the body
    pub status: StatusCode,
    /// Structured context; absent or non-empty, never an empty map
    pub details: Option<Map<String, Value>>,
}

impl ErrorResponse {
    /// Build the response for a classified domain error
    ///
    /// `message` is the already-resolved localized string; resolution
    /// happens at the boundary so a resolver fault cannot be mistaken for
    /// the request failure itself.
    pub fn from_api_error(error: &dyn ApiError, message: String) -> Self {
        Self {
            error_name: error.error_name(),
            error_time: SystemTime::now(),
            message: Some(message),
            status: error.status_code(),
            details: error.user_info().filter(|info| !info.is_empty()),
        }
    }

    /// Build the uniform internal-error response for an unclassified failure
    ///
    /// Only the failure's own text is exposed; unclassified failures never
    /// leak structured context.
    pub fn from_unclassified(error: &anyhow::Error) -> Self {
        Self {
            error_name: "GenericException",
            error_time: SystemTime::now(),
            message: Some(error.to_string()),
            status: StatusCode::INTERNAL_SERVER_ERROR,
            details: None,
        }
    }
}
