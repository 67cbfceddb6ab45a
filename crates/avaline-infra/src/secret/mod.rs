//! Environment-backed secret resolution.
//!
//! API keys come from environment variables and are wrapped in
//! [`SecretString`] immediately so they never appear in Debug output or
//! logs. Empty values are treated as absent.

use secrecy::SecretString;

use avaline_types::error::ConfigError;

/// Environment variable holding the completion API key. Required.
pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";

/// Environment variable holding the synthesis API key. Optional: when
/// absent, voice replies are disabled and turns are text-only.
pub const ELEVEN_LABS_API_KEY: &str = "ELEVEN_LABS_API_KEY";

/// Look up an optional secret. Unset, empty, and non-unicode values all
/// resolve to `None`.
pub fn optional_secret(name: &str) -> Option<SecretString> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Some(SecretString::from(value)),
        _ => None,
    }
}

/// Look up a required secret, failing with a fatal [`ConfigError`] when it
/// is absent.
pub fn require_secret(name: &'static str) -> Result<SecretString, ConfigError> {
    optional_secret(name).ok_or(ConfigError::MissingSecret(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_optional_secret_present() {
        // SAFETY: tests in this module use unique variable names and clean up
        // after themselves.
        unsafe { std::env::set_var("AVALINE_TEST_SECRET_1", "key-123") };

        let secret = optional_secret("AVALINE_TEST_SECRET_1").unwrap();
        assert_eq!(secret.expose_secret(), "key-123");

        unsafe { std::env::remove_var("AVALINE_TEST_SECRET_1") };
    }

    #[test]
    fn test_optional_secret_missing() {
        assert!(optional_secret("AVALINE_TEST_SECRET_NONEXISTENT").is_none());
    }

    #[test]
    fn test_optional_secret_empty_is_absent() {
        unsafe { std::env::set_var("AVALINE_TEST_SECRET_2", "") };
        assert!(optional_secret("AVALINE_TEST_SECRET_2").is_none());
        unsafe { std::env::remove_var("AVALINE_TEST_SECRET_2") };
    }

    #[test]
    fn test_require_secret_missing_is_config_error() {
        let err = require_secret("AVALINE_TEST_SECRET_NONEXISTENT").unwrap_err();
        assert!(err.to_string().contains("AVALINE_TEST_SECRET_NONEXISTENT"));
    }
}
