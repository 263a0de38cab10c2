use http::StatusCode;
use serde_json::{Map, Value};

/// Trait for domain errors that can be reported to API consumers
///
/// Implemented by each failure kind the resource layer raises. The server
/// layer converts these into actual HTTP responses, keeping domain errors
/// decoupled from axum.
pub trait ApiError: std::error::Error + Send + Sync {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Wire-stable error tag clients branch on (e.g. `UserNotFoundException`)
    fn error_name(&self) -> &'static str;

    /// Key into the localized message catalog
    fn message_code(&self) -> &'static str;

    /// Ordered substitution values for the catalog template
    fn message_args(&self) -> Vec<String> {
        Vec::new()
    }

    /// Structured context exposed to API consumers
    ///
    /// `None` when the error carries no extra context. An empty map is
    /// treated the same as `None` downstream.
    fn user_info(&self) -> Option<Map<String, Value>> {
        None
    }

    /// Message used for internal logging, never sent to clients
    fn default_message(&self) -> String {
        self.to_string()
    }
}
