//! Bounded rolling window of conversation exchanges.
//!
//! The window holds the last `k` exchanges for a single session. Appending
//! beyond capacity evicts the oldest entry (strict FIFO). The window size is
//! fixed at creation and the window is destroyed with its session -- nothing
//! survives a restart.

use std::collections::VecDeque;

use avaline_types::chat::Exchange;

/// A bounded FIFO window over the most recent exchanges of one session.
#[derive(Debug, Clone)]
pub struct ConversationMemory {
    window: VecDeque<Exchange>,
    k: usize,
}

impl ConversationMemory {
    /// Create an empty window holding at most `k` exchanges.
    pub fn new(k: usize) -> Self {
        Self {
            window: VecDeque::with_capacity(k),
            k,
        }
    }

    /// The fixed window size.
    pub fn window_size(&self) -> usize {
        self.k
    }

    /// Number of exchanges currently held.
    pub fn len(&self) -> usize {
        self.window.len()
    }

    /// Whether the window holds no exchanges.
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// Append one exchange, evicting the oldest entry when the window is
    /// already full. A zero-sized window retains nothing.
    pub fn append(&mut self, user: impl Into<String>, assistant: impl Into<String>) {
        if self.k == 0 {
            return;
        }
        if self.window.len() == self.k {
            self.window.pop_front();
        }
        self.window.push_back(Exchange::new(user, assistant));
    }

    /// Snapshot of the current window, oldest first.
    pub fn render(&self) -> Vec<Exchange> {
        self.window.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_window_is_empty() {
        let memory = ConversationMemory::new(2);
        assert!(memory.is_empty());
        assert_eq!(memory.len(), 0);
        assert_eq!(memory.window_size(), 2);
    }

    #[test]
    fn test_append_within_capacity() {
        let mut memory = ConversationMemory::new(2);
        memory.append("Hi", "Hello!");
        assert_eq!(memory.len(), 1);
        memory.append("How are you?", "Great!");
        assert_eq!(memory.len(), 2);

        let window = memory.render();
        assert_eq!(window[0], Exchange::new("Hi", "Hello!"));
        assert_eq!(window[1], Exchange::new("How are you?", "Great!"));
    }

    #[test]
    fn test_append_evicts_oldest_fifo() {
        let mut memory = ConversationMemory::new(2);
        memory.append("Hi", "R1");
        memory.append("How are you?", "R2");
        memory.append("Tell me a joke", "R3");

        let window = memory.render();
        assert_eq!(window.len(), 2);
        assert_eq!(window[0], Exchange::new("How are you?", "R2"));
        assert_eq!(window[1], Exchange::new("Tell me a joke", "R3"));
    }

    #[test]
    fn test_length_never_exceeds_k() {
        let mut memory = ConversationMemory::new(3);
        for i in 0..50 {
            memory.append(format!("u{i}"), format!("a{i}"));
            assert!(memory.len() <= 3);
        }
        // The three most recent survive, oldest first.
        let window = memory.render();
        assert_eq!(window[0], Exchange::new("u47", "a47"));
        assert_eq!(window[2], Exchange::new("u49", "a49"));
    }

    #[test]
    fn test_zero_sized_window_retains_nothing() {
        let mut memory = ConversationMemory::new(0);
        memory.append("Hi", "Hello!");
        assert!(memory.is_empty());
    }
}
