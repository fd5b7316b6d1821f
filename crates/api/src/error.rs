//! Client errors rendered as `{ "error", "code" }` JSON bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use filmstore_core::error::CoreError;
use serde_json::json;

/// Error returned by handlers and extractors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Path segment that does not parse into the expected type.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::Core(CoreError::NotFound { .. }) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            Self::Core(CoreError::Validation(_)) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            Self::Core(CoreError::Conflict(_)) => (StatusCode::CONFLICT, "CONFLICT"),
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
        }
    }

    fn message(&self) -> String {
        match self {
            Self::Core(CoreError::NotFound { entity, id }) => {
                format!("{entity} with id {id} not found")
            }
            Self::Core(CoreError::Validation(msg) | CoreError::Conflict(msg))
            | Self::BadRequest(msg) => msg.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let message = self.message();

        tracing::debug!(status = status.as_u16(), code, %message, "Request rejected");

        (status, Json(json!({ "error": message, "code": code }))).into_response()
    }
}
