//! PasswordHasher trait for credential hashing.
//!
//! Defined in avaline-core so the auth service can hash and verify
//! credentials without coupling to a specific algorithm. The
//! `Argon2PasswordHasher` adapter lives in avaline-infra.

use avaline_types::error::AuthError;

/// Abstraction over password hashing and verification.
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password into a self-describing (PHC-format) string.
    fn hash_password(&self, password: &str) -> Result<String, AuthError>;

    /// Verify a plaintext password against a stored hash.
    ///
    /// Returns false for mismatches AND for malformed hashes -- a corrupt
    /// stored hash must not authenticate anyone.
    fn verify_password(&self, password: &str, hash: &str) -> bool;
}
