//! OpenAI completions API types.
//!
//! These are OpenAI-specific request/response structures used for HTTP
//! communication with the `/v1/completions` endpoint. They are NOT the
//! generic LLM types from avaline-types -- those are provider-agnostic.

use serde::{Deserialize, Serialize};

/// Request body for the OpenAI completions endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct OpenAiCompletionRequest {
    pub model: String,
    pub prompt: String,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<Vec<String>>,
}

/// Response body from the OpenAI completions endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiCompletionResponse {
    pub id: String,
    pub model: String,
    pub choices: Vec<OpenAiChoice>,
}

/// One generated choice.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiChoice {
    pub text: String,
    pub finish_reason: Option<String>,
}
