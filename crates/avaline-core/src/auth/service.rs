//! Signup and login logic.
//!
//! AuthService is generic over `UserRepository` and `PasswordHasher` so it
//! depends only on capabilities, never on a concrete store or algorithm.

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use avaline_types::error::{AuthError, RepositoryError};
use avaline_types::user::User;

use crate::auth::hash::PasswordHasher;
use crate::auth::repository::UserRepository;

/// Signup and login against the configured user repository.
pub struct AuthService<R: UserRepository, H: PasswordHasher> {
    users: R,
    hasher: H,
}

impl<R: UserRepository, H: PasswordHasher> AuthService<R, H> {
    /// Create a new auth service.
    pub fn new(users: R, hasher: H) -> Self {
        Self { users, hasher }
    }

    /// Register a new user and return the created record.
    ///
    /// Username and password must be non-empty; a taken username fails with
    /// `UsernameTaken`.
    pub async fn signup(&self, username: &str, password: &str) -> Result<User, AuthError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AuthError::Validation("username must not be empty".to_string()));
        }
        if password.is_empty() {
            return Err(AuthError::Validation("password must not be empty".to_string()));
        }

        let password_hash = self.hasher.hash_password(password)?;
        let user = User {
            id: Uuid::now_v7(),
            username: username.to_string(),
            password_hash,
            created_at: Utc::now(),
        };

        let created = self.users.create(&user).await.map_err(|e| match e {
            RepositoryError::Conflict(_) => AuthError::UsernameTaken(username.to_string()),
            other => AuthError::Storage(other.to_string()),
        })?;

        info!(user_id = %created.id, username = %created.username, "user registered");
        Ok(created)
    }

    /// Verify credentials and return the matching user.
    ///
    /// Unknown username and wrong password both fail with
    /// `InvalidCredentials` -- the caller cannot distinguish them.
    pub async fn login(&self, username: &str, password: &str) -> Result<User, AuthError> {
        let user = self
            .users
            .find_by_username(username.trim())
            .await
            .map_err(|e| AuthError::Storage(e.to_string()))?
            .ok_or(AuthError::InvalidCredentials)?;

        if !self.hasher.verify_password(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials);
        }

        info!(user_id = %user.id, username = %user.username, "user logged in");
        Ok(user)
    }
}
