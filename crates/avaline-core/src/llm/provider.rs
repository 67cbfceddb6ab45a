//! LlmProvider trait definition.
//!
//! This is the abstraction the turn orchestrator calls for reply text.
//! Uses native async fn in traits (RPITIT, Rust 2024 edition).
//! Implementations live in avaline-infra (e.g., `OpenAiCompletionProvider`).

use avaline_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for completion provider backends.
///
/// A single failed call surfaces the error to the caller; providers do not
/// retry, truncate, or post-process model output.
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "openai").
    fn name(&self) -> &str;

    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
