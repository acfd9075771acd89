pub mod request_id;

use axum::{
    body::Body,
    http::Request,
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::controllers::{health, voice::VoiceController};
use crate::infrastructure::config::Config;

pub use request_id::{request_id_middleware, RequestId, X_REQUEST_ID};

/// Build the application router
///
/// Anything that is not an API route is served from the static UI directory.
pub fn build_router(config: Arc<Config>, voice_controller: Arc<VoiceController>) -> Router {
    let voice_routes = Router::new()
        .route("/voice/generate", post(VoiceController::generate))
        .route("/voice/preview", post(VoiceController::preview))
        .with_state(voice_controller);

    let health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(config.clone());

    Router::new()
        .merge(health_routes)
        .merge(voice_routes)
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                let request_id = request
                    .extensions()
                    .get::<RequestId>()
                    .map(|id| id.0.as_str())
                    .unwrap_or("-");
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %request_id
                )
            }),
        )
        // Outermost so the trace span can see the request ID
        .layer(middleware::from_fn(request_id_middleware))
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    voice_controller: Arc<VoiceController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(config.clone(), voice_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
