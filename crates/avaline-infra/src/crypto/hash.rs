//! Argon2id password hashing.
//!
//! Implements the `PasswordHasher` trait from `avaline-core` using the
//! `argon2` crate (RustCrypto ecosystem) with its default parameters and a
//! random per-password salt. Hashes are PHC-format strings.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString};
use argon2::Argon2;

use avaline_core::auth::hash::PasswordHasher;
use avaline_types::error::AuthError;

/// Argon2id implementation of `PasswordHasher`.
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    /// Create a new hasher.
    pub fn new() -> Self {
        Self
    }
}

impl Default for Argon2PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash_password(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            // Never echo hasher internals (or the password) into the error.
            .map_err(|_| AuthError::Storage("password hashing failed".to_string()))
    }

    fn verify_password(&self, password: &str, hash: &str) -> bool {
        PasswordHash::new(hash)
            .map(|parsed| {
                Argon2::default()
                    .verify_password(password.as_bytes(), &parsed)
                    .is_ok()
            })
            .unwrap_or(false)
    }
}
