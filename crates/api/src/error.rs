use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce the service's fixed
/// `{ "error": ... }` JSON error bodies. Per-frame decode failures and
/// unparseable model replies never reach this type -- the former are
/// dropped frame-by-frame, the latter degrade into a 200 response.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Zero frames survived decoding; the request is rejected before any
    /// inference cost is incurred.
    #[error("No valid frames provided")]
    NoValidFrames,

    /// The inference call (or anything else outside the anticipated
    /// failure surface) failed.
    #[error("Analysis error: {0}")]
    Analysis(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NoValidFrames => StatusCode::BAD_REQUEST,
            AppError::Analysis(description) => {
                tracing::error!(error = %description, "Analysis request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = json!({ "error": self.to_string() });

        (status, axum::Json(body)).into_response()
    }
}
