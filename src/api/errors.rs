use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::game::HangmanError;

/// Structured API error that serializes to JSON.
#[derive(Debug)]
pub enum ApiError {
    InvalidRequest(String),
    InternalError(String),
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorDetail {
    code: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, "INVALID_REQUEST", msg),
            ApiError::InternalError(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg)
            }
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<HangmanError> for ApiError {
    fn from(err: HangmanError) -> Self {
        match &err {
            HangmanError::InvalidInput(_) | HangmanError::AlreadyGuessed(_) => {
                ApiError::InvalidRequest(err.to_string())
            }
            HangmanError::EmptyBank
            | HangmanError::EmptyWord { .. }
            | HangmanError::InsufficientStages { .. }
            | HangmanError::IndexOutOfRange { .. }
            | HangmanError::Io { .. } => {
                tracing::error!(error = %err, "game invariant violated");
                ApiError::InternalError(err.to_string())
            }
        }
    }
}
