//! Session cookie authentication extractor.
//!
//! Extracts the `avaline_session` cookie, parses it as a session token, and
//! resolves it against the in-process session store. Handlers that take
//! [`CurrentUser`] are only reachable with a live session.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

use crate::http::error::AppError;
use crate::state::AppState;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "avaline_session";

/// Authenticated request context. Extracting this validates the session.
///
/// `session_id` doubles as the key of the session's conversation window.
pub struct CurrentUser {
    pub user_id: Uuid,
    pub session_id: Uuid,
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let raw_token = extract_session_token(parts)?;
        let token: Uuid = raw_token.parse().map_err(|_| {
            AppError::Unauthorized("Invalid session cookie; log in again".to_string())
        })?;

        match state.sessions.resolve(&token) {
            Some(user_id) => Ok(CurrentUser {
                user_id,
                session_id: token,
            }),
            None => Err(AppError::Unauthorized(
                "Session expired or unknown; log in again".to_string(),
            )),
        }
    }
}

/// Pull the session token out of the Cookie header(s).
fn extract_session_token(parts: &Parts) -> Result<String, AppError> {
    for header in parts.headers.get_all(axum::http::header::COOKIE) {
        let Ok(raw) = header.to_str() else { continue };
        for pair in raw.split(';') {
            let mut kv = pair.trim().splitn(2, '=');
            if kv.next() == Some(SESSION_COOKIE) {
                if let Some(value) = kv.next() {
                    return Ok(value.trim().to_string());
                }
            }
        }
    }

    Err(AppError::Unauthorized(format!(
        "Missing '{SESSION_COOKIE}' cookie; log in first"
    )))
}
