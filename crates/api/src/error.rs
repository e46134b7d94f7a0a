use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use scrawl_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Only the transport boundary decides user-visible behavior: repositories
/// and use cases hand back `Option`/`bool` for absent records and raw
/// [`CoreError`] for storage failure, and this type turns both into the
/// `{"error": ...}` JSON bodies of the wire contract.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A storage failure from the repository layer.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The requested record does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // Storage failures are fatal to the request, not the process:
            // log the detail, report a generic 500.
            AppError::Core(err) => {
                tracing::error!(error = %err, "Storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
            AppError::NotFound { entity, id } => (
                StatusCode::NOT_FOUND,
                format!("{entity} with id {id} not found"),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        (status, axum::Json(json!({ "error": message }))).into_response()
    }
}
