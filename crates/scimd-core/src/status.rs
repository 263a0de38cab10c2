use http::StatusCode;
use serde::Serialize;

/// Wire representation of an HTTP status
///
/// Shared between single-error payloads and bulk operation responses so
/// that both report status with the same numeric value and reason phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusLine {
    /// Numeric status code
    pub value: u16,
    /// Canonical reason phrase
    pub reason: &'static str,
}

impl From<StatusCode> for StatusLine {
    fn from(status: StatusCode) -> Self {
        Self {
            value: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown"),
        }
    }
}
