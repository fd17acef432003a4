use chrono::{Duration, TimeZone, Utc};
use toolio_core::db::open_db_in_memory;
use toolio_core::service::todo_store::{load_tasks, TODOS_KEY};
use toolio_core::{
    FixedClock, KeyValueRepository, MemoryKeyValueRepository, RepoError,
    SqliteKeyValueRepository, TaskValidationError, TodoError, TodoStats, TodoStore,
};

fn clock() -> FixedClock {
    FixedClock::new(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap())
}

#[test]
fn add_prepends_newest_first() {
    let clock = clock();
    let mut store = TodoStore::with_clock(MemoryKeyValueRepository::new(), &clock);

    store.add("A").unwrap();
    clock.advance(Duration::milliseconds(5));
    store.add("B").unwrap();

    let texts: Vec<_> = store.tasks().iter().map(|task| task.text.as_str()).collect();
    assert_eq!(texts, vec!["B", "A"]);
    assert!(store.tasks()[0].id > store.tasks()[1].id);
}

#[test]
fn add_trims_and_rejects_blank_text_without_mutation() {
    let clock = clock();
    let mut store = TodoStore::with_clock(MemoryKeyValueRepository::new(), &clock);
    store.add("  keep me  ").unwrap();

    for blank in ["", "   ", "\n\t"] {
        let err = store.add(blank).unwrap_err();
        assert_eq!(err, TodoError::Validation(TaskValidationError::EmptyText));
    }
    assert_eq!(store.tasks().len(), 1);
    assert_eq!(store.tasks()[0].text, "keep me");
}

#[test]
fn new_task_uses_clock_for_id_and_timestamp() {
    let clock = clock();
    let mut store = TodoStore::with_clock(MemoryKeyValueRepository::new(), &clock);

    let task = store.add("write tests").unwrap().value;
    assert_eq!(
        task.id,
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
            .unwrap()
            .timestamp_millis()
    );
    assert!(!task.completed);
    assert_eq!(task.created_at_iso(), "2024-05-01T12:00:00.000Z");
}

#[test]
fn ids_stay_unique_when_clock_does_not_advance() {
    let clock = clock();
    let mut store = TodoStore::with_clock(MemoryKeyValueRepository::new(), &clock);

    let ids: Vec<_> = (0..5)
        .map(|n| store.add(&format!("task {n}")).unwrap().value.id)
        .collect();
    for pair in ids.windows(2) {
        assert_eq!(pair[1], pair[0] + 1);
    }
}

#[test]
fn double_toggle_restores_state() {
    let clock = clock();
    let mut store = TodoStore::with_clock(MemoryKeyValueRepository::new(), &clock);
    let id = store.add("flip").unwrap().value.id;

    assert!(store.toggle(id).unwrap().value.completed);
    assert!(!store.toggle(id).unwrap().value.completed);
    assert!(!store.get(id).unwrap().completed);
}

#[test]
fn toggle_unknown_id_is_not_found() {
    let clock = clock();
    let mut store = TodoStore::with_clock(MemoryKeyValueRepository::new(), &clock);
    store.add("only").unwrap();

    assert_eq!(store.toggle(42).unwrap_err(), TodoError::NotFound(42));
    assert_eq!(store.set_completed(42, true).unwrap_err(), TodoError::NotFound(42));
}

#[test]
fn set_completed_is_idempotent() {
    let clock = clock();
    let mut store = TodoStore::with_clock(MemoryKeyValueRepository::new(), &clock);
    let id = store.add("check").unwrap().value.id;

    store.set_completed(id, true).unwrap();
    let outcome = store.set_completed(id, true).unwrap();
    assert!(outcome.value.completed);
    assert_eq!(outcome.stats.completed, 1);
}

#[test]
fn remove_unknown_id_is_a_noop() {
    let clock = clock();
    let mut store = TodoStore::with_clock(MemoryKeyValueRepository::new(), &clock);
    let id = store.add("stay").unwrap().value.id;

    let outcome = store.remove(id + 1000);
    assert!(!outcome.value);
    assert_eq!(store.tasks().len(), 1);

    let outcome = store.remove(id);
    assert!(outcome.value);
    assert!(store.tasks().is_empty());
}

#[test]
fn stats_follow_every_mutation() {
    let clock = clock();
    let mut store = TodoStore::with_clock(MemoryKeyValueRepository::new(), &clock);
    store.add("a").unwrap();
    store.add("b").unwrap();
    let id = store.add("c").unwrap().value.id;

    let outcome = store.toggle(id).unwrap();
    assert_eq!(
        outcome.stats,
        TodoStats {
            total: 3,
            completed: 1,
            pending: 2,
        }
    );

    let outcome = store.clear();
    assert_eq!(outcome.value, 3);
    assert_eq!(outcome.stats, TodoStats::default());
}

#[test]
fn fresh_store_over_same_repository_reproduces_state() {
    let repo = MemoryKeyValueRepository::new();
    let clock = clock();

    let mut store = TodoStore::with_clock(&repo, &clock);
    let first = store.add("first").unwrap().value.id;
    clock.advance(Duration::seconds(1));
    store.add("second").unwrap();
    store.toggle(first).unwrap();
    let expected = store.tasks().to_vec();
    drop(store);

    let reopened = TodoStore::with_clock(&repo, &clock);
    assert_eq!(reopened.tasks(), expected.as_slice());
}

#[test]
fn persisted_payload_uses_camel_case_wire_format() {
    let repo = MemoryKeyValueRepository::new();
    let clock = clock();
    let mut store = TodoStore::with_clock(&repo, &clock);
    let id = store.add("ship it").unwrap().value.id;

    let raw = repo.get_value(TODOS_KEY).unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "id": id,
            "text": "ship it",
            "completed": false,
            "createdAt": "2024-05-01T12:00:00.000Z",
        }])
    );
}

#[test]
fn corrupt_or_missing_payload_loads_empty() {
    let repo = MemoryKeyValueRepository::new();
    assert!(load_tasks(&repo, TODOS_KEY).is_empty());

    let corrupt_payloads = [
        "not json",
        r#"{"id":1}"#,
        r#"[{"id":1,"text":"   ","createdAt":"2024-05-01T12:00:00.000Z"}]"#,
        r#"[{"id":0,"text":"x","createdAt":"2024-05-01T12:00:00.000Z"}]"#,
        r#"[{"id":1,"text":"x","createdAt":"yesterday"}]"#,
    ];
    for corrupt in corrupt_payloads {
        repo.insert_raw(TODOS_KEY, corrupt);
        let store = TodoStore::open(&repo);
        assert!(store.tasks().is_empty(), "payload {corrupt:?} should load empty");
    }
}

#[test]
fn missing_completed_field_defaults_to_false() {
    let repo = MemoryKeyValueRepository::new();
    repo.insert_raw(
        TODOS_KEY,
        r#"[{"id":1714564800000,"text":"legacy","createdAt":"2024-05-01T12:00:00.000Z"}]"#,
    );

    let store = TodoStore::open(&repo);
    assert_eq!(store.tasks().len(), 1);
    assert!(!store.tasks()[0].completed);
}

#[test]
fn unavailable_storage_loads_empty_and_warns_on_write() {
    let clock = clock();
    let mut store = TodoStore::with_clock(MemoryKeyValueRepository::unavailable(), &clock);
    assert!(store.tasks().is_empty());

    let outcome = store.add("memory only").unwrap();
    assert!(!outcome.is_persisted());
    assert!(matches!(
        outcome.persist_warning,
        Some(RepoError::Unavailable(_))
    ));
    assert_eq!(store.tasks().len(), 1);
}

#[test]
fn quota_exceeded_keeps_memory_authoritative() {
    let repo = MemoryKeyValueRepository::with_quota(160);
    let clock = clock();
    let mut store = TodoStore::with_clock(&repo, &clock);

    assert!(store.add("short").unwrap().is_persisted());
    let outcome = store.add(&"x".repeat(200)).unwrap();
    assert!(matches!(
        outcome.persist_warning,
        Some(RepoError::QuotaExceeded { .. })
    ));
    assert_eq!(store.tasks().len(), 2);

    // Storage still holds the last successful write.
    assert_eq!(load_tasks(&repo, TODOS_KEY).len(), 1);
}

#[test]
fn sqlite_repository_round_trips_tasks() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteKeyValueRepository::new(&conn);
    let clock = clock();

    let mut store = TodoStore::with_clock(&repo, &clock);
    store.add("durable").unwrap();
    clock.advance(Duration::minutes(1));
    let id = store.add("also durable").unwrap().value.id;
    store.toggle(id).unwrap();
    let expected = store.tasks().to_vec();

    let mut reopened = TodoStore::with_clock(&repo, &clock);
    assert_eq!(reopened.tasks(), expected.as_slice());

    reopened.clear();
    assert!(load_tasks(&repo, TODOS_KEY).is_empty());
}

#[test]
fn custom_key_isolates_lists() {
    let repo = MemoryKeyValueRepository::new();
    let clock = clock();

    let mut work = TodoStore::with_key(&repo, &clock, "todos.work");
    work.add("report").unwrap();

    let home = TodoStore::with_clock(&repo, &clock);
    assert!(home.tasks().is_empty());
    assert_eq!(work.key(), "todos.work");
}

fn add_remove_sequence<R: KeyValueRepository>(store: &mut TodoStore<R, &FixedClock>, clock: &FixedClock) {
    let first = store.add("a").unwrap().value.id;
    clock.advance(Duration::milliseconds(1));
    store.add("b").unwrap();

    assert!(store.remove(first).value);
    assert!(!store.remove(999).value);
}

#[test]
fn remove_sequence_round_trips_through_memory_repository() {
    let repo = MemoryKeyValueRepository::new();
    let clock = clock();

    let mut store = TodoStore::with_clock(&repo, &clock);
    add_remove_sequence(&mut store, &clock);
    let expected = store.tasks().to_vec();

    let reopened = TodoStore::with_clock(&repo, &clock);
    assert_eq!(reopened.tasks(), expected.as_slice());
    let texts: Vec<_> = reopened.tasks().iter().map(|task| task.text.as_str()).collect();
    assert_eq!(texts, vec!["b"]);
}

#[test]
fn remove_sequence_round_trips_through_sqlite_repository() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteKeyValueRepository::new(&conn);
    let clock = clock();

    let mut store = TodoStore::with_clock(&repo, &clock);
    add_remove_sequence(&mut store, &clock);
    let expected = store.tasks().to_vec();

    let reopened = TodoStore::with_clock(&repo, &clock);
    assert_eq!(reopened.tasks(), expected.as_slice());
    assert_eq!(reopened.stats().total, 1);
}
