//! Root HTTP Routes
//!
//! Greeting and health check.

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

use super::errors::MessageResponse;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Create root routes
pub fn root_routes() -> Router {
    Router::new()
        .route("/", get(greeting_handler))
        .route("/health", get(health_handler))
}

async fn greeting_handler() -> Json<MessageResponse> {
    Json(MessageResponse::new("Hello, World!"))
}

/// Health check handler
async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}

