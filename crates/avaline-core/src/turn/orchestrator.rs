//! The turn orchestrator: wires prompt composition, the completion provider,
//! the conversation window, and speech synthesis into one request cycle.
//!
//! Sequence per turn:
//! 1. compose the prompt from persona + the session's current window;
//! 2. call the completion provider -- on failure the turn aborts and the
//!    window is NOT updated;
//! 3. append (input, reply) to the window -- always before any synthesis
//!    attempt, so memory reflects the exchange even if synthesis fails;
//! 4. attempt synthesis; its outcome never alters the reply text.

use tracing::{debug, warn};
use uuid::Uuid;

use avaline_types::chat::{PersonaSpec, TurnOutcome};
use avaline_types::config::CompanionConfig;
use avaline_types::llm::{CompletionRequest, LlmError};
use avaline_types::speech::SynthesisResult;

use crate::conversation::store::MemoryStore;
use crate::llm::provider::LlmProvider;
use crate::speech::sink::AudioSink;
use crate::speech::synthesizer::SpeechSynthesizer;
use crate::turn::prompt::PromptComposer;

/// Errors that abort a turn.
#[derive(Debug, thiserror::Error)]
pub enum TurnError {
    #[error("language model call failed: {0}")]
    Upstream(#[from] LlmError),
}

/// Orchestrates one conversation turn per request.
///
/// Generic over the provider, synthesizer, and sink ports so the pipeline is
/// testable with stubs. `speech` is `None` when synthesis is disabled at
/// startup (no API key); turns are then text-only.
pub struct TurnOrchestrator<L, S, A> {
    persona: PersonaSpec,
    memory: MemoryStore,
    llm: L,
    speech: Option<S>,
    sink: A,
    model: String,
    temperature: f64,
    max_tokens: u32,
}

impl<L, S, A> TurnOrchestrator<L, S, A>
where
    L: LlmProvider,
    S: SpeechSynthesizer,
    A: AudioSink,
{
    /// Create an orchestrator from its collaborators and model settings.
    pub fn new(
        persona: PersonaSpec,
        memory: MemoryStore,
        llm: L,
        speech: Option<S>,
        sink: A,
        config: &CompanionConfig,
    ) -> Self {
        Self {
            persona,
            memory,
            llm,
            speech,
            sink,
            model: config.model.clone(),
            temperature: config.model_temperature,
            max_tokens: config.max_tokens,
        }
    }

    /// The session-keyed conversation store.
    pub fn memory(&self) -> &MemoryStore {
        &self.memory
    }

    /// Drop the conversation window for a session that has ended.
    pub fn end_session(&self, session_id: &Uuid) {
        self.memory.remove(session_id);
    }

    /// Run one turn for the given session.
    ///
    /// Returns the reply text plus an optional reference to the synthesized
    /// audio artifact. Provider failure aborts the turn without touching the
    /// session's window.
    pub async fn run_turn(
        &self,
        session_id: Uuid,
        input: &str,
    ) -> Result<TurnOutcome, TurnError> {
        let history = self.memory.render(&session_id);
        let prompt = PromptComposer::compose(&self.persona, &history, input);
        debug!(%session_id, history_len = history.len(), "prompt composed");

        let request = CompletionRequest {
            model: self.model.clone(),
            prompt,
            max_tokens: self.max_tokens,
            temperature: Some(self.temperature),
            stop: None,
        };
        let reply = self.llm.complete(&request).await?;
        let response = reply.text;
        debug!(%session_id, provider = self.llm.name(), finish_reason = %reply.finish_reason, "reply obtained");

        // Memory reflects the exchange before any synthesis attempt.
        self.memory.append(session_id, input, &response);

        let audio_file = self.synthesize_reply(&session_id, &response).await;

        Ok(TurnOutcome {
            response,
            audio_file,
        })
    }

    /// Attempt synthesis of the reply; never fatal.
    async fn synthesize_reply(&self, session_id: &Uuid, response: &str) -> Option<String> {
        let speech = self.speech.as_ref()?;
        match speech.synthesize(response).await {
            SynthesisResult::Audio {
                bytes,
                content_type,
            } => match self.sink.store(&bytes, &content_type).await {
                Ok(reference) => Some(reference),
                Err(err) => {
                    warn!(%session_id, error = %err, "failed to store synthesized audio");
                    None
                }
            },
            SynthesisResult::Unavailable { reason } => {
                warn!(%session_id, synthesizer = speech.name(), %reason, "synthesis unavailable, returning text-only reply");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use avaline_types::chat::Exchange;
    use avaline_types::llm::{CompletionResponse, FinishReason};

    fn test_config() -> CompanionConfig {
        CompanionConfig::default()
    }

    fn persona() -> PersonaSpec {
        PersonaSpec::new("You are AVA, a devoted companion.")
    }

    /// Provider that echoes the prompt back as the reply.
    struct EchoProvider;

    impl LlmProvider for EchoProvider {
        fn name(&self) -> &str {
            "echo"
        }

        async fn complete(
            &self,
            request: &CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            Ok(CompletionResponse {
                id: "cmpl-echo".to_string(),
                text: request.prompt.clone(),
                model: request.model.clone(),
                finish_reason: FinishReason::Stop,
            })
        }
    }

    /// Provider that returns scripted replies in order.
    struct ScriptedProvider {
        replies: Mutex<VecDeque<String>>,
    }

    impl ScriptedProvider {
        fn new(replies: &[&str]) -> Self {
            Self {
                replies: Mutex::new(replies.iter().map(|r| r.to_string()).collect()),
            }
        }
    }

    impl LlmProvider for ScriptedProvider {
        fn name(&self) -> &str {
            "scripted"
        }

        async fn complete(
            &self,
            request: &CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            let text = self
                .replies
                .lock()
                .unwrap()
                .pop_front()
                .expect("scripted provider ran out of replies");
            Ok(CompletionResponse {
                id: "cmpl-scripted".to_string(),
                text,
                model: request.model.clone(),
                finish_reason: FinishReason::Stop,
            })
        }
    }

    /// Provider that always fails.
    struct FailingProvider;

    impl LlmProvider for FailingProvider {
        fn name(&self) -> &str {
            "failing"
        }

        async fn complete(
            &self,
            _request: &CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            Err(LlmError::Provider {
                message: "HTTP 503: unavailable".to_string(),
            })
        }
    }

    /// Synthesizer returning a fixed outcome.
    struct StubSynthesizer {
        result: SynthesisResult,
    }

    impl StubSynthesizer {
        fn audio() -> Self {
            Self {
                result: SynthesisResult::Audio {
                    bytes: vec![0xff, 0xfb],
                    content_type: "audio/mpeg".to_string(),
                },
            }
        }

        fn unavailable(reason: &str) -> Self {
            Self {
                result: SynthesisResult::Unavailable {
                    reason: reason.to_string(),
                },
            }
        }
    }

    impl SpeechSynthesizer for StubSynthesizer {
        fn name(&self) -> &str {
            "stub"
        }

        async fn synthesize(&self, _text: &str) -> SynthesisResult {
            self.result.clone()
        }
    }

    /// Sink that records stored payloads in memory.
    struct RecordingSink {
        stored: Mutex<Vec<Vec<u8>>>,
    }

    impl RecordingSink {
        fn new() -> Self {
            Self {
                stored: Mutex::new(Vec::new()),
            }
        }
    }

    impl AudioSink for RecordingSink {
        async fn store(&self, bytes: &[u8], _content_type: &str) -> Result<String, std::io::Error> {
            self.stored.lock().unwrap().push(bytes.to_vec());
            Ok("/api/v1/chat/audio".to_string())
        }
    }

    fn orchestrator<L: LlmProvider>(
        llm: L,
        speech: Option<StubSynthesizer>,
    ) -> TurnOrchestrator<L, StubSynthesizer, RecordingSink> {
        TurnOrchestrator::new(
            persona(),
            MemoryStore::new(2),
            llm,
            speech,
            RecordingSink::new(),
            &test_config(),
        )
    }

    #[tokio::test]
    async fn test_composed_prompt_reaches_provider_verbatim() {
        let turns = orchestrator(EchoProvider, None);
        let session = Uuid::new_v4();

        let outcome = turns.run_turn(session, "Hi").await.unwrap();
        assert_eq!(
            outcome.response,
            "You are AVA, a devoted companion.\n\nBoyfriend: Hi\nAVA:"
        );
    }

    #[tokio::test]
    async fn test_window_scenario_three_turns() {
        let turns = orchestrator(ScriptedProvider::new(&["R1", "R2", "R3"]), None);
        let session = Uuid::new_v4();

        for input in ["Hi", "How are you?", "Tell me a joke"] {
            turns.run_turn(session, input).await.unwrap();
        }

        assert_eq!(
            turns.memory().render(&session),
            vec![
                Exchange::new("How are you?", "R2"),
                Exchange::new("Tell me a joke", "R3"),
            ]
        );
    }

    #[tokio::test]
    async fn test_provider_failure_leaves_memory_untouched() {
        let turns = orchestrator(FailingProvider, None);
        let session = Uuid::new_v4();

        let result = turns.run_turn(session, "Hi").await;
        assert!(matches!(result, Err(TurnError::Upstream(_))));
        assert!(turns.memory().render(&session).is_empty());
    }

    #[tokio::test]
    async fn test_synthesis_unavailable_still_returns_text() {
        let turns = orchestrator(
            ScriptedProvider::new(&["R1"]),
            Some(StubSynthesizer::unavailable("HTTP 500")),
        );
        let session = Uuid::new_v4();

        let outcome = turns.run_turn(session, "Hi").await.unwrap();
        assert_eq!(outcome.response, "R1");
        assert!(outcome.audio_file.is_none());
        // The exchange was still recorded.
        assert_eq!(
            turns.memory().render(&session),
            vec![Exchange::new("Hi", "R1")]
        );
    }

    #[tokio::test]
    async fn test_successful_synthesis_returns_reference() {
        let turns = orchestrator(
            ScriptedProvider::new(&["Hello!"]),
            Some(StubSynthesizer::audio()),
        );
        let session = Uuid::new_v4();

        let outcome = turns.run_turn(session, "Hi").await.unwrap();
        assert_eq!(outcome.response, "Hello!");
        assert_eq!(outcome.audio_file.as_deref(), Some("/api/v1/chat/audio"));
    }

    #[tokio::test]
    async fn test_no_synthesizer_means_text_only() {
        let turns = orchestrator(ScriptedProvider::new(&["R1"]), None);
        let outcome = turns.run_turn(Uuid::new_v4(), "Hi").await.unwrap();
        assert_eq!(outcome.response, "R1");
        assert!(outcome.audio_file.is_none());
    }

    #[tokio::test]
    async fn test_history_flows_into_prompt() {
        let turns = orchestrator(EchoProvider, None);
        let session = Uuid::new_v4();

        turns.run_turn(session, "Hi").await.unwrap();
        let second = turns.run_turn(session, "again").await.unwrap();

        // The second prompt contains the first exchange.
        assert!(second.response.contains("Boyfriend: Hi\n"));
        assert!(second.response.ends_with("Boyfriend: again\nAVA:"));
    }

    #[tokio::test]
    async fn test_end_session_drops_window() {
        let turns = orchestrator(ScriptedProvider::new(&["R1"]), None);
        let session = Uuid::new_v4();
        turns.run_turn(session, "Hi").await.unwrap();
        turns.end_session(&session);
        assert!(turns.memory().render(&session).is_empty());
    }
}
