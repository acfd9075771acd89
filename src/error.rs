use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    ExternalService(String),
}

/// Error envelope returned by every endpoint when a request fails.
///
/// Errors are reported in-band with HTTP 200 so the browser front end only
/// has to inspect `success`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl AppError {
    /// Whether the error was caused by the caller's input
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::BadRequest(_))
    }

    /// Convert to the error envelope
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            success: false,
            error: self.to_string(),
        }
    }
}

/// Implement IntoResponse for automatic conversion in handlers
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_client_error() {
            tracing::warn!(error = %self, "Request rejected");
        } else {
            tracing::error!(error = %self, "Request failed");
        }

        (StatusCode::OK, Json(self.to_response())).into_response()
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
