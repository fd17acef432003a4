use toolio_core::db::migrations::{current_version, latest_version};
use toolio_core::db::{open_db, open_db_in_memory, DbError};
use toolio_core::{KeyValueRepository, SqliteKeyValueRepository};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(current_version(&conn).unwrap(), latest_version());
    assert_table_exists(&conn, "kv_entries");
}

#[test]
fn opening_same_database_twice_is_idempotent_and_keeps_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("toolio.db");

    let conn_first = open_db(&path).unwrap();
    SqliteKeyValueRepository::new(&conn_first)
        .set_value("theme", "dark")
        .unwrap();
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(current_version(&conn_second).unwrap(), latest_version());
    assert_eq!(
        SqliteKeyValueRepository::new(&conn_second)
            .get_value("theme")
            .unwrap()
            .as_deref(),
        Some("dark")
    );
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match err {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn opening_database_in_missing_directory_reports_open_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("toolio.db");

    let err = open_db(&path).unwrap_err();
    assert!(matches!(err, DbError::Open { mode: "file", .. }));
    assert_eq!(err.schema_version(), None);
}

#[test]
fn sqlite_repository_upserts_and_removes() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteKeyValueRepository::new(&conn);

    assert_eq!(repo.get_value("todos").unwrap(), None);
    repo.set_value("todos", "[]").unwrap();
    repo.set_value("todos", "[1]").unwrap();
    assert_eq!(repo.get_value("todos").unwrap().as_deref(), Some("[1]"));

    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM kv_entries;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);

    repo.remove_value("todos").unwrap();
    repo.remove_value("todos").unwrap();
    assert_eq!(repo.get_value("todos").unwrap(), None);
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
