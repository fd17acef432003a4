//! Persistence port and its backends.
//!
//! # Responsibility
//! - Define the key-value contract services persist through.
//! - Keep backend details (SQLite, in-memory) out of service code.
//!
//! # Invariants
//! - Values are opaque strings; encoding is the caller's concern.
//! - Backends report failures as `RepoError`, they never panic.

pub mod kv_repo;
