//! finlearn-rs: local-first core for a financial learning community.
//!
//! This crate provides the persistence and state layer of an educational
//! community platform: a course catalog with per-user lesson progress, a
//! discussion forum with posts and replies, Q&A, course comments, mocked
//! local authentication with seed accounts, and per-user settings.
//!
//! All state lives in a single string-keyed key-value store whose values
//! are whole JSON documents. Every write replaces a whole collection;
//! uncoordinated writers race and the last write wins. That policy is the
//! system being modeled, and it is kept.
//!
//! # Features
//!
//! - Key-value store adapter over SQLite with malformed-value fallback
//! - Typed key builder for every persisted key pattern
//! - Per-entity repositories (users, courses, posts, replies, Q&A,
//!   comments, progress, learning records, settings)
//! - Seed-accounts-first plaintext login and validated registration
//! - Single-owner session state hydrated once from the store

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Authentication and session state.
pub mod auth;
/// Forum, Q&A and comment operations.
pub mod community;
/// Configuration and CLI.
pub mod config;
/// Error types.
pub mod error;
/// Course enrollment and lesson progress.
pub mod learning;
/// Persisted entity types.
pub mod models;
/// Entity repositories.
pub mod repo;
/// Seed fixtures.
pub mod seed;
/// Key-value store adapter.
pub mod store;

#[cfg(test)]
mod tests;

pub use auth::{AuthService, Session};
pub use community::CommunityService;
pub use config::{Cli, Command, Config};
pub use error::{AppError, Result};
pub use learning::LearningService;
pub use repo::Repo;
pub use store::{Store, StoreKey};
