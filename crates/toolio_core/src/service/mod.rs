//! Session-scoped services over the persistence port.
//!
//! # Responsibility
//! - Own mutable tool state (todo list, theme) explicitly instead of
//!   through page globals.
//! - Persist after every mutation and report storage trouble as warnings.

pub mod clock;
pub mod theme_service;
pub mod todo_store;
