use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;
use crate::infrastructure::config::Config;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Readiness only reports configuration; it never calls the provider
pub async fn health_ready(State(config): State<Arc<Config>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ready",
            "tts": "google",
            "credentials": config.google_credentials.kind()
        })),
    )
}
