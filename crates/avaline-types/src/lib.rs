//! Shared domain types for Avaline.
//!
//! This crate contains the core domain types used across the Avaline
//! platform: conversation exchanges, LLM and speech-synthesis request/response
//! shapes, configuration, users, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
pub mod speech;
pub mod user;
