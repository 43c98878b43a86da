//! SQLite-backed durable storage.
//!
//! # Responsibility
//! - Persist key-value entries in the `local_storage` table.
//!
//! # Invariants
//! - Connection must come from `db::open_db*` so the schema is upgraded.
//! - Writes are upserts; one row per key.

use super::{KeyValueStorage, StorageResult};
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};

pub struct SqliteStorage<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStorage<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl KeyValueStorage for SqliteStorage<'_> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM local_storage WHERE key = ?1;",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO local_storage (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        debug!(
            "event=storage_set module=storage status=ok key={} bytes={}",
            key,
            value.len()
        );
        Ok(())
    }
}
