//! Todo list state machine with whole-list persistence.
//!
//! # Responsibility
//! - Own the newest-first task list for one session.
//! - Mirror the full list to the key-value port after every mutation.
//! - Recompute list statistics alongside every mutation result.
//!
//! # Invariants
//! - Tasks are ordered newest-first; `add` always prepends.
//! - Task ids are unique and strictly increasing in creation order.
//! - Missing or unreadable persisted data loads as an empty list.
//! - A failed write never rolls back memory; it is reported as a warning.

use crate::model::task::{Task, TaskId, TaskValidationError};
use crate::repo::kv_repo::{KeyValueRepository, RepoError};
use crate::service::clock::{Clock, SystemClock};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key holding the JSON task array.
pub const TODOS_KEY: &str = "todos";

/// Errors returned by todo mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// Input rejected; the list is unchanged.
    Validation(TaskValidationError),
    /// No task with this id (it may have been removed already).
    NotFound(TaskId),
}

impl Display for TodoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "task not found: {id}"),
        }
    }
}

impl Error for TodoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<TaskValidationError> for TodoError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Counts shown under the list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TodoStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

impl TodoStats {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|task| task.completed).count();
        Self {
            total,
            completed,
            pending: total - completed,
        }
    }
}

/// Result of a mutation that reached memory.
///
/// `persist_warning` is set when the write-through to storage failed; the
/// in-memory list is still authoritative for the session.
#[derive(Debug)]
pub struct TodoOutcome<T> {
    pub value: T,
    pub stats: TodoStats,
    pub persist_warning: Option<RepoError>,
}

impl<T> TodoOutcome<T> {
    pub fn is_persisted(&self) -> bool {
        self.persist_warning.is_none()
    }
}

/// Reads the task list stored under `key`.
///
/// Never fails: unavailable storage, a missing key or a value that does not
/// decode into valid tasks all yield an empty list.
pub fn load_tasks<R: KeyValueRepository + ?Sized>(repo: &R, key: &str) -> Vec<Task> {
    let raw = match repo.get_value(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(err) => {
            warn!("event=todo_load module=todo status=error error_code=storage_read error={err}");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<Task>>(&raw) {
        Ok(tasks) => {
            debug!("event=todo_load module=todo status=ok total={}", tasks.len());
            tasks
        }
        Err(err) => {
            warn!(
                "event=todo_load module=todo status=error error_code=corrupt_payload bytes={} error={err}",
                raw.len()
            );
            Vec::new()
        }
    }
}

/// Todo list bound to one repository key.
pub struct TodoStore<R: KeyValueRepository, C: Clock = SystemClock> {
    repo: R,
    clock: C,
    key: String,
    tasks: Vec<Task>,
}

impl<R: KeyValueRepository> TodoStore<R> {
    /// Opens the store under [`TODOS_KEY`] using wall-clock time.
    pub fn open(repo: R) -> Self {
        Self::with_clock(repo, SystemClock)
    }
}

impl<R: KeyValueRepository, C: Clock> TodoStore<R, C> {
    /// Opens the store under [`TODOS_KEY`] with an explicit clock.
    pub fn with_clock(repo: R, clock: C) -> Self {
        Self::with_key(repo, clock, TODOS_KEY)
    }

    /// Opens the store under a caller-chosen key and loads its contents.
    pub fn with_key(repo: R, clock: C, key: impl Into<String>) -> Self {
        let key = key.into();
        let tasks = load_tasks(&repo, &key);
        Self {
            repo,
            clock,
            key,
            tasks,
        }
    }

    /// Replaces memory with whatever storage currently holds.
    pub fn load(&mut self) -> &[Task] {
        self.tasks = load_tasks(&self.repo, &self.key);
        &self.tasks
    }

    /// Tasks newest-first.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn stats(&self) -> TodoStats {
        TodoStats::from_tasks(&self.tasks)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Gives the repository back, e.g. to reopen a fresh store over it.
    pub fn into_repository(self) -> R {
        self.repo
    }

    /// Adds a task at the top of the list.
    ///
    /// # Errors
    /// - `TodoError::Validation` when `text` is blank; nothing is stored.
    pub fn add(&mut self, text: &str) -> Result<TodoOutcome<Task>, TodoError> {
        let now = self.clock.now();
        let id = self.next_id(now.timestamp_millis());
        let task = Task::new(id, text, now).inspect_err(|err| {
            debug!("event=todo_add module=todo status=rejected reason={err}");
        })?;

        self.tasks.insert(0, task.clone());
        info!(
            "event=todo_add module=todo status=ok task_id={id} total={}",
            self.tasks.len()
        );
        Ok(self.commit(task))
    }

    /// Flips a task's completion flag.
    pub fn toggle(&mut self, id: TaskId) -> Result<TodoOutcome<Task>, TodoError> {
        let task = self.find_mut(id)?;
        task.toggle();
        let updated = task.clone();
        info!(
            "event=todo_toggle module=todo status=ok task_id={id} completed={}",
            updated.completed
        );
        Ok(self.commit(updated))
    }

    /// Sets a task's completion flag to an explicit value (checkbox state).
    pub fn set_completed(
        &mut self,
        id: TaskId,
        completed: bool,
    ) -> Result<TodoOutcome<Task>, TodoError> {
        let task = self.find_mut(id)?;
        task.completed = completed;
        let updated = task.clone();
        info!("event=todo_set_completed module=todo status=ok task_id={id} completed={completed}");
        Ok(self.commit(updated))
    }

    /// Removes a task. Unknown ids are a no-op; `value` tells whether one was removed.
    pub fn remove(&mut self, id: TaskId) -> TodoOutcome<bool> {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        let removed = self.tasks.len() != before;
        info!("event=todo_remove module=todo status=ok task_id={id} removed={removed}");
        self.commit(removed)
    }

    /// Drops every task; `value` is how many were removed.
    pub fn clear(&mut self) -> TodoOutcome<usize> {
        let removed = self.tasks.len();
        self.tasks.clear();
        info!("event=todo_clear module=todo status=ok removed={removed}");
        self.commit(removed)
    }

    fn find_mut(&mut self, id: TaskId) -> Result<&mut Task, TodoError> {
        self.tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(TodoError::NotFound(id))
    }

    fn next_id(&self, now_ms: i64) -> TaskId {
        match self.tasks.iter().map(|task| task.id).max() {
            Some(newest) if now_ms <= newest => newest + 1,
            _ => now_ms.max(1),
        }
    }

    fn commit<T>(&self, value: T) -> TodoOutcome<T> {
        TodoOutcome {
            value,
            stats: self.stats(),
            persist_warning: self.persist().err(),
        }
    }

    fn persist(&self) -> Result<(), RepoError> {
        let payload = serde_json::to_string(&self.tasks)
            .map_err(|err| RepoError::InvalidData(err.to_string()))?;

        self.repo
            .set_value(&self.key, &payload)
            .inspect_err(|err| {
                warn!(
                    "event=todo_persist module=todo status=error total={} bytes={} error={err}",
                    self.tasks.len(),
                    payload.len()
                );
            })
    }
}
