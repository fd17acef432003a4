//! Todo task record.
//!
//! # Responsibility
//! - Define the task shape persisted under the todo storage key.
//! - Validate task text and timestamps on construction and on decode.
//!
//! # Invariants
//! - `text` is trimmed and never empty.
//! - `id` is positive; uniqueness is enforced by the owning store.
//! - `created_at` carries millisecond precision so it survives the
//!   ISO-8601 wire format unchanged.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Serialize, Serializer};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Task identifier: creation time in epoch milliseconds, bumped on collision.
pub type TaskId = i64;

/// Validation failures for task records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Text is empty after trimming.
    EmptyText,
    /// Identifier must be a positive integer.
    InvalidId(TaskId),
    /// `createdAt` is not an ISO-8601 timestamp.
    InvalidTimestamp(String),
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "task text must not be empty"),
            Self::InvalidId(id) => write!(f, "task id must be positive, got {id}"),
            Self::InvalidTimestamp(value) => {
                write!(f, "task createdAt is not an ISO-8601 timestamp: `{value}`")
            }
        }
    }
}

impl Error for TaskValidationError {}

/// One todo item.
///
/// Wire shape: `{id: number, text: string, completed: boolean, createdAt: string}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "TaskRecord")]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    #[serde(serialize_with = "serialize_iso_millis")]
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates an open task.
    ///
    /// `text` is trimmed; `created_at` is truncated to milliseconds.
    pub fn new(
        id: TaskId,
        text: &str,
        created_at: DateTime<Utc>,
    ) -> Result<Self, TaskValidationError> {
        let task = Self {
            id,
            text: text.trim().to_string(),
            completed: false,
            created_at: created_at.trunc_subsecs(3),
        };
        task.validate()?;
        Ok(task)
    }

    /// Checks record-level invariants.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.id <= 0 {
            return Err(TaskValidationError::InvalidId(self.id));
        }
        if self.text.trim().is_empty() {
            return Err(TaskValidationError::EmptyText);
        }
        Ok(())
    }

    /// Flips completion and returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }

    /// `createdAt` as written to storage, e.g. `2024-05-01T12:00:00.000Z`.
    pub fn created_at_iso(&self) -> String {
        format_iso_millis(&self.created_at)
    }
}

/// Raw decode target; converted into [`Task`] only after validation.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TaskRecord {
    id: TaskId,
    text: String,
    #[serde(default)]
    completed: bool,
    created_at: String,
}

impl TryFrom<TaskRecord> for Task {
    type Error = TaskValidationError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        let created_at = DateTime::parse_from_rfc3339(record.created_at.trim())
            .map_err(|_| TaskValidationError::InvalidTimestamp(record.created_at.clone()))?
            .with_timezone(&Utc);

        let task = Self {
            id: record.id,
            text: record.text,
            completed: record.completed,
            created_at,
        };
        task.validate()?;
        Ok(task)
    }
}

fn format_iso_millis(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn serialize_iso_millis<S: Serializer>(
    value: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_iso_millis(value))
}

#[cfg(test)]
mod tests {
    use super::{format_iso_millis, Task, TaskValidationError};
    use chrono::{TimeZone, Utc};

    #[test]
    fn iso_format_matches_browser_to_iso_string() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        assert_eq!(format_iso_millis(&at), "2024-05-01T12:00:00.000Z");
    }

    #[test]
    fn new_rejects_non_positive_id() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let err = Task::new(0, "ok", at).expect_err("zero id must be rejected");
        assert_eq!(err, TaskValidationError::InvalidId(0));
    }

    #[test]
    fn toggle_returns_new_state() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let mut task = Task::new(1, "ship", at).expect("valid task");
        assert!(task.toggle());
        assert!(!task.toggle());
    }
}
