//! Global configuration types for Avaline.
//!
//! `CompanionConfig` represents the top-level `config.toml` that controls the
//! conversation window, model sampling, outbound timeouts, and voice
//! parameters. All fields have sensible defaults so a missing or empty file
//! yields a working configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration for the Avaline service.
///
/// Loaded from `{data_dir}/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanionConfig {
    /// Number of most-recent exchanges retained in the rolling window.
    #[serde(default = "default_history_window_k")]
    pub history_window_k: usize,

    /// Completion model identifier.
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature for the completion model.
    #[serde(default = "default_model_temperature")]
    pub model_temperature: f64,

    /// Maximum tokens to generate per reply.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Timeout applied to both outbound HTTP calls, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Optional path to the persona instruction file. Relative paths resolve
    /// against the data directory. When absent, a built-in persona is used.
    #[serde(default)]
    pub persona_path: Option<PathBuf>,

    /// Voice parameters for speech synthesis.
    #[serde(default)]
    pub voice: VoiceConfig,
}

/// Voice parameters for the speech synthesis API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceConfig {
    /// Voice identifier at the synthesis provider.
    #[serde(default = "default_voice_id")]
    pub voice_id: String,

    /// Synthesis model identifier.
    #[serde(default = "default_voice_model_id")]
    pub model_id: String,

    #[serde(default)]
    pub stability: f64,

    #[serde(default)]
    pub similarity_boost: f64,
}

fn default_history_window_k() -> usize {
    2
}

fn default_model() -> String {
    "gpt-3.5-turbo-instruct".to_string()
}

fn default_model_temperature() -> f64 {
    0.5
}

fn default_max_tokens() -> u32 {
    256
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_voice_id() -> String {
    "21m00Tcm4TlvDq8ikWAM".to_string()
}

fn default_voice_model_id() -> String {
    "eleven_monolingual_v1".to_string()
}

impl Default for CompanionConfig {
    fn default() -> Self {
        Self {
            history_window_k: default_history_window_k(),
            model: default_model(),
            model_temperature: default_model_temperature(),
            max_tokens: default_max_tokens(),
            request_timeout_secs: default_request_timeout_secs(),
            persona_path: None,
            voice: VoiceConfig::default(),
        }
    }
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            voice_id: default_voice_id(),
            model_id: default_voice_model_id(),
            stability: 0.0,
            similarity_boost: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_companion_config_default_values() {
        let config = CompanionConfig::default();
        assert_eq!(config.history_window_k, 2);
        assert_eq!(config.model, "gpt-3.5-turbo-instruct");
        assert!((config.model_temperature - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.max_tokens, 256);
        assert_eq!(config.request_timeout_secs, 30);
        assert!(config.persona_path.is_none());
        assert_eq!(config.voice.voice_id, "21m00Tcm4TlvDq8ikWAM");
        assert_eq!(config.voice.model_id, "eleven_monolingual_v1");
    }

    #[test]
    fn test_companion_config_deserialize_empty_uses_defaults() {
        let config: CompanionConfig = toml::from_str("").unwrap();
        assert_eq!(config.history_window_k, 2);
        assert!((config.voice.stability - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_companion_config_deserialize_with_values() {
        let toml_str = r#"
history_window_k = 4
model = "gpt-4o-mini"
model_temperature = 0.9
request_timeout_secs = 10
persona_path = "persona.md"

[voice]
voice_id = "abc123"
stability = 0.4
"#;
        let config: CompanionConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.history_window_k, 4);
        assert_eq!(config.model, "gpt-4o-mini");
        assert!((config.model_temperature - 0.9).abs() < f64::EPSILON);
        assert_eq!(config.request_timeout_secs, 10);
        assert_eq!(config.persona_path, Some(PathBuf::from("persona.md")));
        assert_eq!(config.voice.voice_id, "abc123");
        assert!((config.voice.stability - 0.4).abs() < f64::EPSILON);
        // Unset voice fields still default
        assert_eq!(config.voice.model_id, "eleven_monolingual_v1");
    }

    #[test]
    fn test_companion_config_serde_roundtrip() {
        let config = CompanionConfig {
            history_window_k: 3,
            ..CompanionConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: CompanionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.history_window_k, 3);
        assert_eq!(parsed.model, config.model);
    }
}
