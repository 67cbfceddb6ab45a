//! Speech synthesis types for Avaline.
//!
//! `SynthesisRequest` serializes to the exact JSON body the synthesis API
//! expects; `SynthesisResult` makes "no audio produced" an explicit value
//! rather than an error, because a failed synthesis never fails the turn.

use serde::{Deserialize, Serialize};

/// Fixed voice parameters sent with every synthesis request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceSettings {
    pub stability: f64,
    pub similarity_boost: f64,
}

/// A synthesis request: reply text plus fixed voice parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisRequest {
    pub text: String,
    pub model_id: String,
    pub voice_settings: VoiceSettings,
}

/// Outcome of one synthesis attempt.
///
/// Either raw audio bytes with a content type, or an explicit unavailable
/// marker carrying the reason (non-success status, empty body, transport
/// failure). Unavailable is reported, logged, and the turn continues with a
/// text-only reply.
#[derive(Debug, Clone, PartialEq)]
pub enum SynthesisResult {
    Audio { bytes: Vec<u8>, content_type: String },
    Unavailable { reason: String },
}

impl SynthesisResult {
    /// Whether this result carries audio.
    pub fn is_audio(&self) -> bool {
        matches!(self, SynthesisResult::Audio { .. })
    }
}
