//! Tool catalog and search-as-you-type.
//!
//! # Responsibility
//! - Own the static list of tools shown on the home page grid.
//! - Filter that list by free-text query or by category.
//! - Map tool ids to page paths and back.

pub mod catalog;
