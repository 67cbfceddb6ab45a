//! In-process session store.
//!
//! Maps opaque session tokens (random UUIDs, carried in a cookie) to user
//! ids. The session token doubles as the key for the session's conversation
//! window, so revoking a session also identifies the window to drop.
//! Sessions do not survive a restart.

use dashmap::DashMap;
use uuid::Uuid;

/// Map from session token to the authenticated user id.
pub struct SessionStore {
    sessions: DashMap<Uuid, Uuid>,
}

impl SessionStore {
    /// Create an empty session store.
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Issue a new session for a user and return its token.
    pub fn create(&self, user_id: Uuid) -> Uuid {
        let token = Uuid::new_v4();
        self.sessions.insert(token, user_id);
        token
    }

    /// Resolve a session token to its user id.
    pub fn resolve(&self, token: &Uuid) -> Option<Uuid> {
        self.sessions.get(token).map(|entry| *entry)
    }

    /// Revoke a session. Returns true when the token existed.
    pub fn revoke(&self, token: &Uuid) -> bool {
        self.sessions.remove(token).is_some()
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no sessions are live.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_resolve() {
        let store = SessionStore::new();
        let user_id = Uuid::now_v7();
        let token = store.create(user_id);
        assert_eq!(store.resolve(&token), Some(user_id));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_resolve_unknown_token() {
        let store = SessionStore::new();
        assert!(store.resolve(&Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_revoke() {
        let store = SessionStore::new();
        let token = store.create(Uuid::now_v7());
        assert!(store.revoke(&token));
        assert!(store.resolve(&token).is_none());
        assert!(!store.revoke(&token));
        assert!(store.is_empty());
    }

    #[test]
    fn test_tokens_are_unique_per_session() {
        let store = SessionStore::new();
        let user_id = Uuid::now_v7();
        let a = store.create(user_id);
        let b = store.create(user_id);
        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
    }
}
