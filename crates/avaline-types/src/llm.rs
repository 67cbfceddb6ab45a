//! LLM request/response types for Avaline.
//!
//! These types model the data shapes for completion-provider interactions.
//! They are provider-agnostic: the concrete OpenAI wire structures live in
//! avaline-infra.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Request to an LLM provider for a text completion.
///
/// The prompt is a single pre-composed string (persona + history + new
/// utterance); the provider does not assemble or post-process it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub prompt: String,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<Vec<String>>,
}

/// Response from an LLM provider for a completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub id: String,
    pub text: String,
    pub model: String,
    pub finish_reason: FinishReason,
}

/// Reason why the LLM stopped generating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    Stop,
    Length,
    ContentFilter,
}

impl fmt::Display for FinishReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FinishReason::Stop => write!(f, "stop"),
            FinishReason::Length => write!(f, "length"),
            FinishReason::ContentFilter => write!(f, "content_filter"),
        }
    }
}

impl FromStr for FinishReason {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stop" => Ok(FinishReason::Stop),
            "length" => Ok(FinishReason::Length),
            "content_filter" => Ok(FinishReason::ContentFilter),
            other => Err(format!("invalid finish reason: '{other}'")),
        }
    }
}

/// Errors from LLM provider operations.
///
/// Every variant is fatal to the turn that triggered the call: the
/// orchestrator aborts, leaves memory untouched, and reports the failure
/// upward. No variant is retried.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("provider error: {message}")]
    Provider { message: String },

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("rate limited")]
    RateLimited,

    #[error("request timed out")]
    Timeout,

    #[error("deserialization error: {0}")]
    Deserialization(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_reason_roundtrip() {
        for reason in [
            FinishReason::Stop,
            FinishReason::Length,
            FinishReason::ContentFilter,
        ] {
            let s = reason.to_string();
            let parsed: FinishReason = s.parse().unwrap();
            assert_eq!(reason, parsed);
        }
    }

    #[test]
    fn test_finish_reason_serde() {
        let json = serde_json::to_string(&FinishReason::ContentFilter).unwrap();
        assert_eq!(json, "\"content_filter\"");
        let parsed: FinishReason = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, FinishReason::ContentFilter);
    }

    #[test]
    fn test_completion_request_omits_unset_options() {
        let request = CompletionRequest {
            model: "gpt-3.5-turbo-instruct".to_string(),
            prompt: "Hello".to_string(),
            max_tokens: 256,
            temperature: None,
            stop: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("temperature").is_none());
        assert!(json.get("stop").is_none());
    }

    #[test]
    fn test_llm_error_display() {
        let err = LlmError::Provider {
            message: "HTTP 503: unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "provider error: HTTP 503: unavailable");
        assert_eq!(LlmError::Timeout.to_string(), "request timed out");
    }
}
