use rusqlite::Connection;
use todolist_core::db::schema::schema_version;
use todolist_core::db::{open_db, open_db_in_memory, DbError};
use todolist_core::{KeyValueStorage, SqliteStorage, TodoStore, STORAGE_KEY};

#[test]
fn open_db_in_memory_upgrades_schema() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(stored_version(&conn), schema_version());
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'local_storage'
            );",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1);
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::SchemaTooNew { found, supported } => {
            assert_eq!(found, 999);
            assert_eq!(supported, schema_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn get_and_set_use_single_row_per_key() {
    let conn = open_db_in_memory().unwrap();
    let mut storage = SqliteStorage::new(&conn);

    assert_eq!(storage.get("k").unwrap(), None);
    storage.set("k", "one").unwrap();
    storage.set("k", "two").unwrap();
    assert_eq!(storage.get("k").unwrap().as_deref(), Some("two"));

    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM local_storage;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn collection_survives_reopening_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todolist.db");

    let (first, second) = {
        let conn = open_db(&path).unwrap();
        let mut store = TodoStore::initialize(SqliteStorage::new(&conn)).unwrap();
        let first = store.add("Buy milk").unwrap();
        let second = store.add("Walk dog").unwrap();
        store.toggle(&second, true).unwrap();
        (first, second)
    };

    let conn = open_db(&path).unwrap();
    let store = TodoStore::initialize(SqliteStorage::new(&conn)).unwrap();
    let ids = store.todos().iter().map(|todo| todo.id.clone()).collect::<Vec<_>>();
    assert_eq!(ids, vec![first.clone(), second.clone()]);
    assert!(!store.todos().get(&first).unwrap().completed);
    assert!(store.todos().get(&second).unwrap().completed);

    let raw: String = conn
        .query_row(
            "SELECT value FROM local_storage WHERE key = ?1;",
            [STORAGE_KEY],
            |row| row.get(0),
        )
        .unwrap();
    assert!(raw.starts_with('['));
}

fn stored_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}
