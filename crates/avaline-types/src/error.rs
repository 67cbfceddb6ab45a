//! Shared error types for Avaline.

use thiserror::Error;

/// Errors from repository operations (used by trait definitions in
/// avaline-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("entity not found")]
    NotFound,

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("storage error: {0}")]
    Storage(String),
}

/// Errors related to authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("username '{0}' is already taken")]
    UsernameTaken(String),

    #[error("invalid input: {0}")]
    Validation(String),

    #[error("storage error: {0}")]
    Storage(String),
}

/// Errors surfaced while loading configuration, the persona text, or API
/// keys. Fatal at startup: the service refuses to serve turns until the
/// configuration is corrected.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("persona text not readable: {0}")]
    PersonaUnreadable(String),

    #[error("missing required secret '{0}' in environment")]
    MissingSecret(&'static str),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}
