//! OpenAiCompletionProvider -- concrete [`LlmProvider`] implementation for
//! the OpenAI completions API.
//!
//! Sends the pre-composed prompt to `/v1/completions` with bearer
//! authentication. No retries: a single failed call surfaces the error to
//! the turn orchestrator. The API key is wrapped in
//! [`secrecy::SecretString`] and is never logged or included in `Debug`
//! output.

pub mod types;

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use avaline_core::llm::provider::LlmProvider;
use avaline_types::llm::{CompletionRequest, CompletionResponse, FinishReason, LlmError};

use self::types::{OpenAiCompletionRequest, OpenAiCompletionResponse};

/// OpenAI completions provider.
pub struct OpenAiCompletionProvider {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
}

impl OpenAiCompletionProvider {
    /// Create a new provider with the given request timeout.
    pub fn new(api_key: SecretString, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            base_url: "https://api.openai.com".to_string(),
        }
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Build the full API URL for a given path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Convert a generic [`CompletionRequest`] into the OpenAI wire request.
    fn to_openai_request(&self, request: &CompletionRequest) -> OpenAiCompletionRequest {
        OpenAiCompletionRequest {
            model: request.model.clone(),
            prompt: request.prompt.clone(),
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            stop: request.stop.clone(),
        }
    }
}

/// Map an OpenAI finish_reason string to the generic [`FinishReason`].
fn map_finish_reason(finish_reason: Option<&str>) -> FinishReason {
    match finish_reason {
        Some("length") => FinishReason::Length,
        Some("content_filter") => FinishReason::ContentFilter,
        _ => FinishReason::Stop,
    }
}

// OpenAiCompletionProvider intentionally does NOT derive Debug to prevent
// accidental exposure of internal state including the API key.

impl LlmProvider for OpenAiCompletionProvider {
    fn name(&self) -> &str {
        "openai"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let body = self.to_openai_request(request);
        let url = self.url("/v1/completions");

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LlmError::Timeout
                } else {
                    LlmError::Provider {
                        message: format!("HTTP request failed: {e}"),
                    }
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 => LlmError::AuthenticationFailed,
                429 => LlmError::RateLimited,
                _ => LlmError::Provider {
                    message: format!("HTTP {status}: {error_body}"),
                },
            });
        }

        let openai_resp: OpenAiCompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Deserialization(format!("failed to parse response: {e}")))?;

        let choice = openai_resp
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::Deserialization("response contained no choices".to_string()))?;

        Ok(CompletionResponse {
            id: openai_resp.id,
            text: choice.text,
            model: openai_resp.model,
            finish_reason: map_finish_reason(choice.finish_reason.as_deref()),
        })
    }
}
