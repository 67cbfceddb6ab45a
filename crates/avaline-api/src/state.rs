//! Application state wiring all services together.
//!
//! AppState holds the concrete service instances used by the REST API.
//! Services are generic over the provider/synthesizer/repository traits, but
//! AppState pins them to the concrete infra implementations.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use avaline_core::auth::service::AuthService;
use avaline_core::auth::session::SessionStore;
use avaline_core::conversation::store::MemoryStore;
use avaline_core::turn::orchestrator::TurnOrchestrator;
use avaline_infra::audio::FileAudioSink;
use avaline_infra::config::{load_config, load_persona, resolve_data_dir};
use avaline_infra::crypto::hash::Argon2PasswordHasher;
use avaline_infra::llm::openai::OpenAiCompletionProvider;
use avaline_infra::secret;
use avaline_infra::speech::elevenlabs::ElevenLabsSynthesizer;
use avaline_infra::user::InMemoryUserRepository;

/// Client-visible path of the audio retrieval endpoint; returned as the
/// `audio_file` reference after a synthesized turn.
pub const AUDIO_ENDPOINT: &str = "/api/v1/chat/audio";

/// Concrete type aliases for the service generics pinned to infra
/// implementations.
pub type ConcreteAuthService = AuthService<InMemoryUserRepository, Argon2PasswordHasher>;

pub type ConcreteTurnOrchestrator =
    TurnOrchestrator<OpenAiCompletionProvider, ElevenLabsSynthesizer, FileAudioSink>;

/// Shared application state holding all services.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<ConcreteAuthService>,
    pub sessions: Arc<SessionStore>,
    pub turns: Arc<ConcreteTurnOrchestrator>,
    /// On-disk location of the most recent synthesized reply.
    pub audio_path: PathBuf,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Initialize the application state: load config and persona, resolve
    /// API keys, wire services.
    ///
    /// Fails fast when the persona text or the completion API key is
    /// missing -- the service must not start in a state where it cannot
    /// serve a turn.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        tokio::fs::create_dir_all(&data_dir).await?;

        let config = load_config(&data_dir).await;
        let persona = load_persona(&config, &data_dir).await?;

        let timeout = Duration::from_secs(config.request_timeout_secs);
        let openai_key = secret::require_secret(secret::OPENAI_API_KEY)?;
        let llm = OpenAiCompletionProvider::new(openai_key, timeout);

        // The synthesis key is optional: without it, turns are text-only.
        let speech = secret::optional_secret(secret::ELEVEN_LABS_API_KEY)
            .map(|key| ElevenLabsSynthesizer::new(key, config.voice.clone(), timeout));
        if speech.is_none() {
            tracing::warn!(
                "{} not set, voice replies disabled",
                secret::ELEVEN_LABS_API_KEY
            );
        }

        let audio_dir = data_dir.join("audio");
        let sink = FileAudioSink::new(audio_dir.clone(), AUDIO_ENDPOINT);
        let audio_path = sink.reply_path();

        let memory = MemoryStore::new(config.history_window_k);
        let turns = TurnOrchestrator::new(persona, memory, llm, speech, sink, &config);

        let auth_service =
            AuthService::new(InMemoryUserRepository::new(), Argon2PasswordHasher::new());

        Ok(Self {
            auth_service: Arc::new(auth_service),
            sessions: Arc::new(SessionStore::new()),
            turns: Arc::new(turns),
            audio_path,
            data_dir,
        })
    }
}
