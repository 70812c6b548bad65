use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The response envelope is `{ "success": false, "message": ... }`, with
/// `error` carrying the raw detail and `data` carrying a partial payload
/// where the variant supplies one.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    /// A downstream call answered with a non-success HTTP status.
    /// That status is forwarded to the caller; out-of-range values fall back
    /// to 500.
    #[error("{message}: {detail}")]
    Upstream {
        status: u16,
        message: String,
        detail: String,
    },

    /// Completion output that did not parse as JSON. Never retried.
    #[error("{message}: {detail}")]
    Parse { message: String, detail: String },

    /// Completion output that parsed but is missing required keys.
    /// Carries the partial payload so callers can diagnose it.
    #[error("{message}")]
    InvalidPayload { message: String, data: Value },

    #[error("Error interno del servidor")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                json!({ "success": false, "message": message }),
            ),
            AppError::Validation(message) => (
                StatusCode::BAD_REQUEST,
                json!({ "success": false, "message": message }),
            ),
            AppError::Upstream {
                status,
                message,
                detail,
            } => {
                tracing::error!("upstream error (status {status}): {detail}");
                (
                    StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                    json!({ "success": false, "message": message, "error": detail }),
                )
            }
            AppError::Parse { message, detail } => {
                tracing::error!("completion parse error: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "success": false, "message": message, "error": detail }),
                )
            }
            AppError::InvalidPayload { message, data } => {
                tracing::error!("invalid completion payload: {message}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "success": false, "message": message, "data": data }),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "success": false,
                        "message": "Error interno del servidor",
                        "error": e.to_string(),
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
