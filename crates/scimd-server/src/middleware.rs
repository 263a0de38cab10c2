use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use http::header;

use crate::boundary::ErrorBoundary;
use crate::failure::CaughtFailure;
use crate::wire;

/// Funnel failures escaping request handlers into the error boundary
///
/// Negotiates the response locale from Accept-Language before running the
/// inner service, then replaces any stashed failure with the canonical
/// error payload. Successful responses pass through untouched.
pub async fn error_boundary_middleware(boundary: ErrorBoundary, request: Request, next: Next) -> Response {
    let locale = boundary
        .catalog()
        .negotiate(
            request
                .headers()
                .get(header::ACCEPT_LANGUAGE)
                .and_then(|value| value.to_str().ok()),
        )
        .to_owned();

    let mut response = next.run(request).await;

    if let Some(caught) = response.extensions_mut().remove::<CaughtFailure>()
        && let Some(failure) = caught.take()
    {
        return wire::into_http(boundary.handle(failure, &locale));
    }

    response
}
