use std::sync::{Arc, Mutex};

use axum::response::{IntoResponse, Response};
use http::StatusCode;

/// Failure escaping a request handler
///
/// Converts from anything `Into<anyhow::Error>` so handlers keep using `?`.
/// `into_response` stashes the failure in the response extensions for the
/// boundary middleware to pick up and replace with the canonical payload.
pub struct Failure(pub(crate) anyhow::Error);

impl<E> From<E> for Failure
where
    E: Into<anyhow::Error>,
{
    fn from(error: E) -> Self {
        Self(error.into())
    }
}

/// Stash moved through response extensions to the boundary middleware
///
/// Extensions require `Clone`, and `anyhow::Error` is not, so the failure
/// rides in a shared take-once slot.
#[derive(Clone)]
pub(crate) struct CaughtFailure(Arc<Mutex<Option<anyhow::Error>>>);

impl CaughtFailure {
    pub(crate) fn take(&self) -> Option<anyhow::Error> {
        self.0.lock().ok().and_then(|mut slot| slot.take())
    }
}

impl IntoResponse for Failure {
    fn into_response(self) -> Response {
        // Bare 500 if the boundary middleware is not installed
        let mut response = StatusCode::INTERNAL_SERVER_ERROR.into_response();
        response
            .extensions_mut()
            .insert(CaughtFailure(Arc::new(Mutex::new(Some(self.0)))));
        response
    }
}
