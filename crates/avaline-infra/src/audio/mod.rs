//! File-backed audio delivery.
//!
//! Implements the `AudioSink` trait from `avaline-core` by writing the
//! synthesized payload to a single well-known file that is overwritten on
//! every turn. The client retrieves it through a separate endpoint; the
//! reference returned to the caller is configured at construction so this
//! adapter stays ignorant of routing.

use std::path::{Path, PathBuf};

use avaline_core::speech::sink::AudioSink;

/// Filename of the most recent synthesized reply.
const REPLY_FILE: &str = "reply.mp3";

/// AudioSink that persists one reply file, overwritten each turn.
pub struct FileAudioSink {
    dir: PathBuf,
    reference: String,
}

impl FileAudioSink {
    /// Create a sink writing under `dir`, returning `reference` to clients.
    pub fn new(dir: impl Into<PathBuf>, reference: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            reference: reference.into(),
        }
    }

    /// Path of the stored reply file.
    pub fn reply_path(&self) -> PathBuf {
        self.dir.join(REPLY_FILE)
    }
}

impl AudioSink for FileAudioSink {
    async fn store(&self, bytes: &[u8], _content_type: &str) -> Result<String, std::io::Error> {
        ensure_dir(&self.dir).await?;
        tokio::fs::write(self.reply_path(), bytes).await?;
        Ok(self.reference.clone())
    }
}

async fn ensure_dir(dir: &Path) -> Result<(), std::io::Error> {
    tokio::fs::create_dir_all(dir).await
}
