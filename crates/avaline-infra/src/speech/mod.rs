//! Speech synthesis implementations.

pub mod elevenlabs;
