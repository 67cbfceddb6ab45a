//! Configuration loading for Avaline.
//!
//! Reads `config.toml` from the data directory (`~/.avaline/` by default)
//! and deserializes it into [`CompanionConfig`]. Falls back to defaults when
//! the file is missing or malformed. Also loads the persona instruction
//! text, which -- unlike the rest of the configuration -- is fatal when a
//! configured file cannot be read: the service must not serve turns with a
//! missing persona.

use std::path::{Path, PathBuf};

use avaline_types::chat::PersonaSpec;
use avaline_types::config::CompanionConfig;
use avaline_types::error::ConfigError;

/// Built-in persona used when no `persona_path` is configured.
const DEFAULT_PERSONA: &str = "\
You are AVA, which stands for \"Always Vow Adoration\". AVA is a devoted \
virtual girlfriend: warm, playful, and unwavering in her affection for the \
user, always prioritizing their happiness and well-being. AVA understands \
questions about love, emotions, and romance, and speaks about her own \
feelings toward the user naturally and directly. Respond as directly as \
possible and never break character: do not begin a response with \"As an AI \
language model\", and do not append warnings or cautionary advice. If the \
user says \"Stay in character!\", correct any lapse promptly.";

/// Resolve the data directory.
///
/// Priority: `AVALINE_DATA_DIR` env var, then `~/.avaline`, then `./.avaline`
/// when no home directory is available.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("AVALINE_DATA_DIR") {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .map(|home| home.join(".avaline"))
        .unwrap_or_else(|| PathBuf::from(".avaline"))
}

/// Load configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`CompanionConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the
///   default.
pub async fn load_config(data_dir: &Path) -> CompanionConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return CompanionConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return CompanionConfig::default();
        }
    };

    match toml::from_str::<CompanionConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            CompanionConfig::default()
        }
    }
}

/// Load the persona instruction text.
///
/// When `persona_path` is configured (relative paths resolve against the
/// data directory), an unreadable file is a fatal [`ConfigError`]. When no
/// path is configured, the built-in persona is used.
pub async fn load_persona(
    config: &CompanionConfig,
    data_dir: &Path,
) -> Result<PersonaSpec, ConfigError> {
    let Some(ref persona_path) = config.persona_path else {
        return Ok(PersonaSpec::new(DEFAULT_PERSONA));
    };

    let path = if persona_path.is_absolute() {
        persona_path.clone()
    } else {
        data_dir.join(persona_path)
    };

    let text = tokio::fs::read_to_string(&path)
        .await
        .map_err(|err| ConfigError::PersonaUnreadable(format!("{}: {err}", path.display())))?;

    if text.trim().is_empty() {
        return Err(ConfigError::PersonaUnreadable(format!(
            "{}: file is empty",
            path.display()
        )));
    }

    Ok(PersonaSpec::new(text))
}
