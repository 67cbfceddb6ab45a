//! Conversation turn and audio retrieval HTTP handlers.
//!
//! Endpoints:
//! - POST /api/v1/chat/message - Run one conversation turn
//! - GET  /api/v1/chat/audio   - Fetch the most recent synthesized reply
//!
//! `send_message` returns `{ "response": <text>, "audio_file": <path-or-null> }`
//! inside the standard envelope. A failed language-model call yields a 502
//! error response; a failed synthesis yields a normal reply with
//! `audio_file: null`.

use std::time::Instant;

use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use avaline_types::chat::TurnOutcome;

use crate::http::error::AppError;
use crate::http::extractors::auth::CurrentUser;
use crate::http::extractors::body::FormOrJson;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// Request body for the message endpoint.
#[derive(Debug, Deserialize)]
pub struct MessageBody {
    pub human_input: String,
}

/// POST /api/v1/chat/message - Run one conversation turn.
pub async fn send_message(
    State(state): State<AppState>,
    user: CurrentUser,
    FormOrJson(body): FormOrJson<MessageBody>,
) -> Result<Json<ApiResponse<TurnOutcome>>, AppError> {
    let start = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    if body.human_input.trim().is_empty() {
        return Err(AppError::Validation(
            "human_input must not be empty".to_string(),
        ));
    }

    tracing::debug!(
        user_id = %user.user_id,
        session_id = %user.session_id,
        "conversation turn requested"
    );

    let outcome = state
        .turns
        .run_turn(user.session_id, &body.human_input)
        .await?;

    Ok(Json(ApiResponse::success(
        outcome,
        request_id,
        start.elapsed().as_millis() as u64,
    )))
}

/// GET /api/v1/chat/audio - Fetch the most recent synthesized reply.
///
/// The file is overwritten on every synthesized turn; 404 until the first
/// one succeeds.
pub async fn get_audio(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> Result<Response, AppError> {
    match tokio::fs::read(&state.audio_path).await {
        Ok(bytes) => Ok(([(CONTENT_TYPE, "audio/mpeg")], bytes).into_response()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Err(AppError::NotFound(
            "No synthesized audio available yet".to_string(),
        )),
        Err(err) => Err(AppError::Internal(err.to_string())),
    }
}
