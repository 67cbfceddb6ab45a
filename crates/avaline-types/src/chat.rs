//! Conversation types for Avaline.
//!
//! These types model one side of the chat pipeline: the persona instruction
//! text, completed exchanges held in the rolling window, and the outcome
//! returned to the client after a turn.

use serde::{Deserialize, Serialize};

/// One completed conversation turn: what the user said and what the
/// companion answered. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    pub user: String,
    pub assistant: String,
}

impl Exchange {
    /// Create a new exchange from a user utterance and the companion's reply.
    pub fn new(user: impl Into<String>, assistant: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            assistant: assistant.into(),
        }
    }
}

/// The companion's fixed instruction text.
///
/// Loaded once at startup from configuration and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonaSpec {
    text: String,
}

impl PersonaSpec {
    /// Wrap persona instruction text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The raw instruction text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Result of one conversation turn.
///
/// `audio_file` is a client-visible reference to the synthesized audio for
/// this reply, or `None` when synthesis was disabled or unavailable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    pub response: String,
    pub audio_file: Option<String>,
}
