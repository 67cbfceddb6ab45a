//! In-memory user repository.
//!
//! Implements the `UserRepository` trait from `avaline-core` with a pair of
//! concurrent maps: id -> user and username -> id. Duplicate usernames are
//! rejected atomically through the entry API. Accounts do not survive a
//! restart -- durable credential storage is explicitly out of scope.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use uuid::Uuid;

use avaline_core::auth::repository::UserRepository;
use avaline_types::error::RepositoryError;
use avaline_types::user::User;

/// Process-local user store.
pub struct InMemoryUserRepository {
    users: DashMap<Uuid, User>,
    by_username: DashMap<String, Uuid>,
}

impl InMemoryUserRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            by_username: DashMap::new(),
        }
    }

    /// Number of registered users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether no users are registered.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        let id = match self.by_username.get(username) {
            Some(entry) => *entry.value(),
            None => return Ok(None),
        };
        Ok(self.users.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<User>, RepositoryError> {
        Ok(self.users.get(id).map(|entry| entry.value().clone()))
    }

    async fn create(&self, user: &User) -> Result<User, RepositoryError> {
        match self.by_username.entry(user.username.clone()) {
            Entry::Occupied(_) => Err(RepositoryError::Conflict(format!(
                "username '{}' already exists",
                user.username
            ))),
            Entry::Vacant(slot) => {
                slot.insert(user.id);
                self.users.insert(user.id, user.clone());
                Ok(user.clone())
            }
        }
    }
}
