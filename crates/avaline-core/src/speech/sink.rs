//! AudioSink trait definition.
//!
//! Delivery of a synthesized audio artifact is a strategy, not an
//! orchestrator concern: the orchestrator hands bytes to the sink and
//! returns whatever reference the sink produces. The shipped implementation
//! writes one file to retrievable storage; other strategies (streaming the
//! payload back, handing it to a player) slot in behind the same trait.

/// Strategy for storing or forwarding a synthesized audio payload.
pub trait AudioSink: Send + Sync {
    /// Store the audio payload and return a client-visible reference to it.
    fn store(
        &self,
        bytes: &[u8],
        content_type: &str,
    ) -> impl std::future::Future<Output = Result<String, std::io::Error>> + Send;
}
