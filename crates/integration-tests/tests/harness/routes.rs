//! Resource routes raising each failure kind the boundary must report

use axum::extract::Path;
use axum::{Router, routing};
use scimd_core::ResourceError;
use scimd_server::Failure;

pub fn resource_routes() -> Router {
    Router::new()
        .route("/Users/{id}", routing::get(get_user))
        .route("/Users", routing::post(create_user))
        .route("/Me", routing::get(get_me))
        .route("/boom", routing::get(boom))
        .route("/ping", routing::get(ping))
}

async fn get_user(Path(id): Path<String>) -> Result<String, Failure> {
    Err(ResourceError::UserNotFound { user_id: id }.into())
}

async fn create_user() -> Result<String, Failure> {
    Err(ResourceError::UserConflict {
        user_name: "bob".to_owned(),
        conflicting_id: "u-42".to_owned(),
    }
    .into())
}

async fn get_me() -> Result<String, Failure> {
    Err(ResourceError::Unauthorized.into())
}

async fn boom() -> Result<String, Failure> {
    Err(anyhow::anyhow!("division by zero").into())
}

async fn ping() -> Result<String, Failure> {
    Ok("pong".to_owned())
}
