//! Prompt assembly for the companion model.
//!
//! Produces the fixed template: persona text, a blank line, the rendered
//! history as labeled line pairs, then the new user line and an open
//! assistant line for the model to continue.
//!
//! Layout:
//! ```text
//! {persona text}
//!
//! Boyfriend: {older user utterance}
//! AVA: {older reply}
//! Boyfriend: {new utterance}
//! AVA:
//! ```

use std::fmt::Write as _;

use avaline_types::chat::{Exchange, PersonaSpec};

/// Label prefix for the user's side of the transcript.
pub const USER_LABEL: &str = "Boyfriend";

/// Label prefix for the companion's side of the transcript.
pub const ASSISTANT_LABEL: &str = "AVA";

/// Builds the completion prompt from persona, history, and the new utterance.
pub struct PromptComposer;

impl PromptComposer {
    /// Build the full prompt string.
    ///
    /// No validation is applied to `input`: an empty utterance passes
    /// through unchanged. Pure -- no side effects.
    pub fn compose(persona: &PersonaSpec, history: &[Exchange], input: &str) -> String {
        let mut prompt = String::with_capacity(persona.text().len() + 256);
        prompt.push_str(persona.text());
        prompt.push_str("\n\n");

        for exchange in history {
            let _ = writeln!(prompt, "{USER_LABEL}: {}", exchange.user);
            let _ = writeln!(prompt, "{ASSISTANT_LABEL}: {}", exchange.assistant);
        }

        let _ = writeln!(prompt, "{USER_LABEL}: {input}");
        let _ = write!(prompt, "{ASSISTANT_LABEL}:");
        prompt
    }
}
