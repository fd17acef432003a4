//! Domain records persisted by the tool suite.
//!
//! # Responsibility
//! - Define the canonical shapes written to key-value storage.
//! - Keep validation next to the records it protects.
//!
//! # Invariants
//! - Every persisted task is identified by a unique, creation-ordered `TaskId`.
//! - Records never carry rendering state.

pub mod task;
pub mod theme;
