use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// API failure taxonomy. Every variant maps to one HTTP status and one JSON
/// envelope shape; handlers pick the variant explicitly instead of relying on
/// positional catch-alls.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed request shape or field validation failure.
    #[error("invalid request")]
    Validation,
    /// Target resource or page does not exist.
    #[error("not found")]
    NotFound,
    /// The store refused the operation (failed write, delete of a missing
    /// row, failed search).
    #[error("unprocessable entity")]
    Unprocessable,
    #[error("internal server error: {0}")]
    Internal(String),
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // 400 carries the bare `{success: false}` envelope; the other
        // statuses use the error/message form.
        let (status, body) = match self {
            AppError::Validation => (StatusCode::BAD_REQUEST, json!({"success": false})),
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                json!({"success": false, "error": 404, "message": "Not found"}),
            ),
            AppError::Unprocessable => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({"success": false, "error": 422, "message": "Unprocessable Entity"}),
            ),
            AppError::Internal(msg) => {
                tracing::error!("internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "success": false,
                        "error": 500,
                        "message": "Server error has occured, please try again!",
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
