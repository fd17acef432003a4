//! Key-value repository contract with SQLite and in-memory implementations.
//!
//! # Responsibility
//! - Read, write and delete whole string values by key.
//! - Model browser-storage failure modes (quota, disabled storage) so
//!   callers can exercise their warning paths.
//!
//! # Invariants
//! - A successful `set_value` is visible to the next `get_value` on the same
//!   backend, including through a fresh repository over the same connection.
//! - A failed write leaves the previously stored value untouched.

use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Storage-layer error.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Write would exceed the backend's byte budget.
    QuotaExceeded {
        key: String,
        required_bytes: usize,
        quota_bytes: usize,
    },
    /// Backend refuses all access (e.g. storage disabled by the user).
    Unavailable(String),
    /// Value could not be encoded for storage.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::QuotaExceeded {
                key,
                required_bytes,
                quota_bytes,
            } => write!(
                f,
                "storage quota exceeded writing `{key}`: {required_bytes} bytes needed, {quota_bytes} allowed"
            ),
            Self::Unavailable(reason) => write!(f, "storage unavailable: {reason}"),
            Self::InvalidData(message) => write!(f, "invalid storage data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Persistence port: whole-value string storage keyed by name.
pub trait KeyValueRepository {
    fn get_value(&self, key: &str) -> RepoResult<Option<String>>;
    fn set_value(&self, key: &str, value: &str) -> RepoResult<()>;
    fn remove_value(&self, key: &str) -> RepoResult<()>;
}

impl<T: KeyValueRepository + ?Sized> KeyValueRepository for &T {
    fn get_value(&self, key: &str) -> RepoResult<Option<String>> {
        (**self).get_value(key)
    }

    fn set_value(&self, key: &str, value: &str) -> RepoResult<()> {
        (**self).set_value(key, value)
    }

    fn remove_value(&self, key: &str) -> RepoResult<()> {
        (**self).remove_value(key)
    }
}

/// SQLite-backed repository over the `kv_entries` table.
///
/// The connection must come from [`crate::db::open_db`] or
/// [`crate::db::open_db_in_memory`] so the schema exists.
pub struct SqliteKeyValueRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteKeyValueRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl KeyValueRepository for SqliteKeyValueRepository<'_> {
    fn get_value(&self, key: &str) -> RepoResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set_value(&self, key: &str, value: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO kv_entries (key, value, updated_at)
             VALUES (?1, ?2, CAST(strftime('%s', 'now') AS INTEGER) * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove_value(&self, key: &str) -> RepoResult<()> {
        self.conn
            .execute("DELETE FROM kv_entries WHERE key = ?1;", [key])?;
        Ok(())
    }
}

/// Session-only repository with optional byte quota.
///
/// Quota accounting counts key and value bytes of every stored entry, the
/// way browser storage budgets whole origins.
#[derive(Debug, Default)]
pub struct MemoryKeyValueRepository {
    entries: RefCell<BTreeMap<String, String>>,
    quota_bytes: Option<usize>,
    unavailable: bool,
}

impl MemoryKeyValueRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository that rejects writes once stored bytes would exceed `quota_bytes`.
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            quota_bytes: Some(quota_bytes),
            ..Self::default()
        }
    }

    /// Repository whose every call fails, like storage disabled in settings.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Total bytes currently held (keys plus values).
    pub fn used_bytes(&self) -> usize {
        self.entries
            .borrow()
            .iter()
            .map(|(key, value)| key.len() + value.len())
            .sum()
    }

    /// Writes a value without quota checks; used to seed corrupted state.
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn ensure_available(&self) -> RepoResult<()> {
        if self.unavailable {
            return Err(RepoError::Unavailable(
                "in-memory storage is disabled".to_string(),
            ));
        }
        Ok(())
    }
}

impl KeyValueRepository for MemoryKeyValueRepository {
    fn get_value(&self, key: &str) -> RepoResult<Option<String>> {
        self.ensure_available()?;
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set_value(&self, key: &str, value: &str) -> RepoResult<()> {
        self.ensure_available()?;

        if let Some(quota_bytes) = self.quota_bytes {
            let existing = self
                .entries
                .borrow()
                .get(key)
                .map_or(0, |old| key.len() + old.len());
            let required_bytes = self.used_bytes() - existing + key.len() + value.len();
            if required_bytes > quota_bytes {
                return Err(RepoError::QuotaExceeded {
                    key: key.to_string(),
                    required_bytes,
                    quota_bytes,
                });
            }
        }

        self.insert_raw(key, value);
        Ok(())
    }

    fn remove_value(&self, key: &str) -> RepoResult<()> {
        self.ensure_available()?;
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{KeyValueRepository, MemoryKeyValueRepository, RepoError};

    #[test]
    fn quota_counts_replaced_value_once() {
        let repo = MemoryKeyValueRepository::with_quota(10);
        repo.set_value("k", "123456789").expect("fits exactly");
        repo.set_value("k", "987654321").expect("replacement fits");
        let err = repo
            .set_value("k", "1234567890")
            .expect_err("one byte over quota");
        assert!(matches!(
            err,
            RepoError::QuotaExceeded {
                required_bytes: 11,
                quota_bytes: 10,
                ..
            }
        ));
        assert_eq!(repo.get_value("k").unwrap().as_deref(), Some("987654321"));
    }

    #[test]
    fn unavailable_repo_fails_every_call() {
        let repo = MemoryKeyValueRepository::unavailable();
        assert!(matches!(repo.get_value("k"), Err(RepoError::Unavailable(_))));
        assert!(matches!(
            repo.set_value("k", "v"),
            Err(RepoError::Unavailable(_))
        ));
        assert!(matches!(repo.remove_value("k"), Err(RepoError::Unavailable(_))));
    }
}
