use axum::response::IntoResponse;

/// Liveness probe
pub async fn health_handler() -> impl IntoResponse {
    "ok"
}
