//! Core logic for the Toolio browser toolbox.
//! Every tool's behavior lives here as plain data in, plain data out;
//! front ends only render what this crate returns.

pub mod db;
pub mod logging;
pub mod model;
pub mod notice;
pub mod repo;
pub mod search;
pub mod service;
pub mod text;
pub mod tools;

pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::task::{Task, TaskId, TaskValidationError};
pub use model::theme::Theme;
pub use notice::{Notice, NoticeLevel};
pub use repo::kv_repo::{
    KeyValueRepository, MemoryKeyValueRepository, RepoError, RepoResult,
    SqliteKeyValueRepository,
};
pub use search::catalog::{search_tools, SearchOutcome, ToolCategory, ToolEntry};
pub use service::clock::{Clock, FixedClock, SystemClock};
pub use service::theme_service::{ThemeChange, ThemeService};
pub use service::todo_store::{TodoError, TodoOutcome, TodoStats, TodoStore};
pub use text::summarizer::{summarize, summarize_request, Summary, SummaryError};
pub use text::word_count::{count_text, TextStats};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
