use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use onboard_core::validation::FieldViolation;

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce the `{ success, message }`
/// envelope the form client expects.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The submitted record violates one or more field constraints.
    #[error("Validation failed")]
    Validation(Vec<FieldViolation>),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(violations) => {
                let body = json!({
                    "success": false,
                    "message": "Validation failed",
                    "errors": violations,
                });
                (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(body)).into_response()
            }
            AppError::Database(err) => {
                // The cause stays server-side; callers only learn that
                // the write failed.
                tracing::error!(error = %err, "Persistence error");
                let body = json!({
                    "success": false,
                    "message": "Client details could not be added",
                });
                (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
            }
        }
    }
}
