//! Business logic and port trait definitions for Avaline.
//!
//! This crate defines the "ports" (provider, synthesizer, sink, repository,
//! and hasher traits) that the infrastructure layer implements, plus the
//! conversation window, prompt composition, and turn orchestration built on
//! top of them. It depends only on `avaline-types` -- never on
//! `avaline-infra` or any HTTP/IO crate.

pub mod auth;
pub mod conversation;
pub mod llm;
pub mod speech;
pub mod turn;
