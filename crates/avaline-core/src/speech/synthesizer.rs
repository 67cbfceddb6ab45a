//! SpeechSynthesizer trait definition.

use avaline_types::speech::SynthesisResult;

/// Trait for text-to-speech backends.
///
/// Synthesis failure is never an error: every outcome -- including non-success
/// status, empty body, and transport failure -- is reported as
/// [`SynthesisResult::Unavailable`] so a turn always completes with at least
/// its text reply. Implementations live in avaline-infra.
pub trait SpeechSynthesizer: Send + Sync {
    /// Human-readable synthesizer name (e.g., "elevenlabs").
    fn name(&self) -> &str;

    /// Synthesize `text` into audio.
    fn synthesize(
        &self,
        text: &str,
    ) -> impl std::future::Future<Output = SynthesisResult> + Send;
}
