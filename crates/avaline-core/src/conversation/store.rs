//! Session-keyed storage of conversation windows.
//!
//! Every operation takes the session id explicitly; windows are created
//! lazily on first append and dropped when the session ends. The map gives
//! per-entry exclusion, so concurrent requests for different sessions never
//! contend and two requests for the same session serialize on the entry.

use dashmap::DashMap;
use uuid::Uuid;

use avaline_types::chat::Exchange;

use crate::conversation::memory::ConversationMemory;

/// Map from session id to that session's conversation window.
pub struct MemoryStore {
    windows: DashMap<Uuid, ConversationMemory>,
    window_size: usize,
}

impl MemoryStore {
    /// Create a store whose windows hold at most `window_size` exchanges.
    pub fn new(window_size: usize) -> Self {
        Self {
            windows: DashMap::new(),
            window_size,
        }
    }

    /// Snapshot of the session's window, oldest first. Empty when the
    /// session has no window yet.
    pub fn render(&self, session_id: &Uuid) -> Vec<Exchange> {
        self.windows
            .get(session_id)
            .map(|window| window.render())
            .unwrap_or_default()
    }

    /// Append an exchange to the session's window, creating the window on
    /// first use.
    pub fn append(&self, session_id: Uuid, user: &str, assistant: &str) {
        self.windows
            .entry(session_id)
            .or_insert_with(|| ConversationMemory::new(self.window_size))
            .append(user, assistant);
    }

    /// Drop the session's window (the session ended).
    pub fn remove(&self, session_id: &Uuid) {
        self.windows.remove(session_id);
    }

    /// Number of sessions currently holding a window.
    pub fn session_count(&self) -> usize {
        self.windows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_unknown_session_is_empty() {
        let store = MemoryStore::new(2);
        assert!(store.render(&Uuid::new_v4()).is_empty());
        assert_eq!(store.session_count(), 0);
    }

    #[test]
    fn test_append_creates_window_lazily() {
        let store = MemoryStore::new(2);
        let session = Uuid::new_v4();
        store.append(session, "Hi", "R1");
        assert_eq!(store.session_count(), 1);
        assert_eq!(store.render(&session), vec![Exchange::new("Hi", "R1")]);
    }

    #[test]
    fn test_sessions_are_isolated() {
        let store = MemoryStore::new(2);
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        store.append(alice, "Hi", "R1");
        store.append(bob, "Hey", "R2");

        assert_eq!(store.render(&alice), vec![Exchange::new("Hi", "R1")]);
        assert_eq!(store.render(&bob), vec![Exchange::new("Hey", "R2")]);
    }

    #[test]
    fn test_eviction_through_store() {
        let store = MemoryStore::new(2);
        let session = Uuid::new_v4();
        store.append(session, "Hi", "R1");
        store.append(session, "How are you?", "R2");
        store.append(session, "Tell me a joke", "R3");

        assert_eq!(
            store.render(&session),
            vec![
                Exchange::new("How are you?", "R2"),
                Exchange::new("Tell me a joke", "R3"),
            ]
        );
    }

    #[test]
    fn test_remove_drops_window() {
        let store = MemoryStore::new(2);
        let session = Uuid::new_v4();
        store.append(session, "Hi", "R1");
        store.remove(&session);
        assert!(store.render(&session).is_empty());
        assert_eq!(store.session_count(), 0);
    }
}
