//! ElevenLabsSynthesizer -- concrete [`SpeechSynthesizer`] implementation
//! for the ElevenLabs text-to-speech API.
//!
//! POSTs the reply text plus fixed voice parameters to
//! `/v1/text-to-speech/{voice_id}` and expects raw `audio/mpeg` bytes back.
//! Every failure mode -- non-success status, empty body, transport error,
//! timeout -- maps to [`SynthesisResult::Unavailable`]; synthesis never
//! fails a turn. The API key is wrapped in [`secrecy::SecretString`] and is
//! never logged or included in `Debug` output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use avaline_core::speech::synthesizer::SpeechSynthesizer;
use avaline_types::config::VoiceConfig;
use avaline_types::speech::{SynthesisRequest, SynthesisResult, VoiceSettings};

/// ElevenLabs text-to-speech synthesizer.
pub struct ElevenLabsSynthesizer {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    voice: VoiceConfig,
}

impl ElevenLabsSynthesizer {
    /// Create a new synthesizer with the given voice and request timeout.
    pub fn new(api_key: SecretString, voice: VoiceConfig, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            base_url: "https://api.elevenlabs.io".to_string(),
            voice,
        }
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// The full synthesis URL for the configured voice.
    fn url(&self) -> String {
        format!(
            "{}/v1/text-to-speech/{}?optimize_streaming_latency=0",
            self.base_url, self.voice.voice_id
        )
    }

    /// Build the JSON request body for a piece of reply text.
    fn request_body(&self, text: &str) -> SynthesisRequest {
        SynthesisRequest {
            text: text.to_string(),
            model_id: self.voice.model_id.clone(),
            voice_settings: VoiceSettings {
                stability: self.voice.stability,
                similarity_boost: self.voice.similarity_boost,
            },
        }
    }
}

// ElevenLabsSynthesizer intentionally does NOT derive Debug to prevent
// accidental exposure of internal state including the API key.

impl SpeechSynthesizer for ElevenLabsSynthesizer {
    fn name(&self) -> &str {
        "elevenlabs"
    }

    async fn synthesize(&self, text: &str) -> SynthesisResult {
        let body = self.request_body(text);

        let response = match self
            .client
            .post(self.url())
            .header("xi-api-key", self.api_key.expose_secret())
            .header("accept", "audio/mpeg")
            .json(&body)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                return SynthesisResult::Unavailable {
                    reason: format!("transport error: {e}"),
                };
            }
        };

        let status = response.status();
        if !status.is_success() {
            return SynthesisResult::Unavailable {
                reason: format!("HTTP {status}"),
            };
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("audio/mpeg")
            .to_string();

        match response.bytes().await {
            Ok(bytes) if !bytes.is_empty() => SynthesisResult::Audio {
                bytes: bytes.to_vec(),
                content_type,
            },
            Ok(_) => SynthesisResult::Unavailable {
                reason: "empty audio body".to_string(),
            },
            Err(e) => SynthesisResult::Unavailable {
                reason: format!("failed to read audio body: {e}"),
            },
        }
    }
}
