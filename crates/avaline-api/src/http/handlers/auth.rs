//! Signup, login, and logout HTTP handlers.
//!
//! Endpoints:
//! - POST /api/v1/auth/signup - Register and log in
//! - POST /api/v1/auth/login  - Verify credentials, issue a session
//! - POST /api/v1/auth/logout - Revoke the session and drop its window
//!
//! Sessions are carried in the `avaline_session` cookie. Signing up also
//! logs the user in, matching the classic form flow.

use std::time::Instant;

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::http::error::AppError;
use crate::http::extractors::auth::{CurrentUser, SESSION_COOKIE};
use crate::http::extractors::body::FormOrJson;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// Request body for signup and login.
#[derive(Debug, Deserialize)]
pub struct CredentialsBody {
    pub username: String,
    pub password: String,
}

/// POST /api/v1/auth/signup - Register a new user and start a session.
pub async fn signup(
    State(state): State<AppState>,
    FormOrJson(body): FormOrJson<CredentialsBody>,
) -> Result<Response, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let user = state.auth_service.signup(&body.username, &body.password).await?;
    let token = state.sessions.create(user.id);

    let resp = ApiResponse::success(
        serde_json::json!({ "user_id": user.id, "username": user.username }),
        request_id,
        start.elapsed().as_millis() as u64,
    );

    Ok(with_session_cookie(Json(resp).into_response(), &token))
}

/// POST /api/v1/auth/login - Verify credentials and start a session.
pub async fn login(
    State(state): State<AppState>,
    FormOrJson(body): FormOrJson<CredentialsBody>,
) -> Result<Response, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let user = state.auth_service.login(&body.username, &body.password).await?;
    let token = state.sessions.create(user.id);

    let resp = ApiResponse::success(
        serde_json::json!({ "user_id": user.id, "username": user.username }),
        request_id,
        start.elapsed().as_millis() as u64,
    );

    Ok(with_session_cookie(Json(resp).into_response(), &token))
}

/// POST /api/v1/auth/logout - End the session.
///
/// Revokes the session token and drops the session's conversation window so
/// no history leaks into a later login.
pub async fn logout(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Response, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    state.sessions.revoke(&user.session_id);
    state.turns.end_session(&user.session_id);

    let resp = ApiResponse::success(
        serde_json::json!({ "logged_out": true }),
        request_id,
        start.elapsed().as_millis() as u64,
    );

    let mut response = Json(resp).into_response();
    response.headers_mut().append(
        SET_COOKIE,
        HeaderValue::from_static("avaline_session=; Path=/; HttpOnly; Max-Age=0"),
    );
    Ok(response)
}

/// Attach the session cookie to a response.
fn with_session_cookie(mut response: Response, token: &Uuid) -> Response {
    let cookie = format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax");
    response.headers_mut().append(
        SET_COOKIE,
        HeaderValue::from_str(&cookie).expect("session cookie is a valid header value"),
    );
    response
}
