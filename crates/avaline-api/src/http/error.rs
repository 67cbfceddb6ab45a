//! Application error type mapping to HTTP status codes and envelope format.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use avaline_core::turn::orchestrator::TurnError;
use avaline_types::error::AuthError;

use crate::http::response::ApiResponse;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Authentication and account errors.
    Auth(AuthError),
    /// The language model call failed; the turn was aborted.
    Upstream(TurnError),
    /// Missing or invalid session.
    Unauthorized(String),
    /// Validation error.
    Validation(String),
    /// Requested resource does not exist.
    NotFound(String),
    /// Generic internal error.
    Internal(String),
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        AppError::Auth(e)
    }
}

impl From<TurnError> for AppError {
    fn from(e: TurnError) -> Self {
        AppError::Upstream(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Auth(AuthError::InvalidCredentials) => (
                StatusCode::UNAUTHORIZED,
                "INVALID_CREDENTIALS",
                "Invalid username or password".to_string(),
            ),
            AppError::Auth(AuthError::UsernameTaken(name)) => (
                StatusCode::CONFLICT,
                "USERNAME_TAKEN",
                format!("Username '{name}' is already taken"),
            ),
            AppError::Auth(AuthError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::Auth(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "AUTH_ERROR",
                e.to_string(),
            ),
            AppError::Upstream(e) => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR", e.to_string()),
            AppError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
            }
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg.clone())
            }
        };

        let body = ApiResponse::error(code, &message, String::new(), 0);
        (status, Json(body)).into_response()
    }
}
