//! UserRepository trait definition.
//!
//! Provides lookup and creation for user accounts. Uses native async fn in
//! traits (RPITIT, Rust 2024 edition). The shipped implementation is an
//! in-memory map in avaline-infra; a real credential store slots in behind
//! the same trait.

use avaline_types::error::RepositoryError;
use avaline_types::user::User;
use uuid::Uuid;

/// Repository trait for user account storage.
pub trait UserRepository: Send + Sync {
    /// Find a user by username.
    fn find_by_username(
        &self,
        username: &str,
    ) -> impl std::future::Future<Output = Result<Option<User>, RepositoryError>> + Send;

    /// Find a user by id.
    fn find_by_id(
        &self,
        id: &Uuid,
    ) -> impl std::future::Future<Output = Result<Option<User>, RepositoryError>> + Send;

    /// Create a new user. Fails with `Conflict` when the username is taken.
    fn create(
        &self,
        user: &User,
    ) -> impl std::future::Future<Output = Result<User, RepositoryError>> + Send;
}
