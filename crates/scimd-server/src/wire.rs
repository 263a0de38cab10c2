use std::time::{SystemTime, UNIX_EPOCH};

use axum::Json;
use axum::response::{IntoResponse, Response};
use scimd_core::StatusLine;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::response::ErrorResponse;

/// JSON wire form of an error response
///
/// `statusCode` uses the same value/reason encoding as bulk operation
/// responses; `time` is unix epoch seconds.
#[derive(Debug, Serialize)]
pub struct WireErrorResponse {
    error: &'static str,
    time: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(rename = "statusCode")]
    status_code: StatusLine,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Map<String, Value>>,
}

/// Encode an error response for the wire
pub fn encode(response: ErrorResponse) -> WireErrorResponse {
    WireErrorResponse {
        error: response.error_name,
        time: unix_seconds(response.error_time),
        message: response.message,
        status_code: StatusLine::from(response.status),
        details: response.details,
    }
}

/// Convert an error response into a transport response
///
/// The transport status line always equals the `statusCode.value` carried
/// in the body.
pub fn into_http(response: ErrorResponse) -> Response {
    let status = response.status;
    (status, Json(encode(response))).into_response()
}

fn unix_seconds(time: SystemTime) -> u64 {
    time.duration_since(UNIX_EPOCH).map(|d| d.as_secs()).unwrap_or(0)
}
