//! Schema steps for the key-value table.
//!
//! Step `n` (1-based) upgrades a file from `user_version = n - 1` to `n`.
//! Steps are append-only.

use super::{DbError, DbResult};
use log::info;
use rusqlite::Connection;

const STEPS: &[&str] = &[include_str!("schema/0001_local_storage.sql")];

/// Schema version written by this build.
pub fn schema_version() -> u32 {
    STEPS.len() as u32
}

/// Brings `conn` up to [`schema_version`] inside one transaction.
///
/// # Errors
/// - [`DbError::SchemaTooNew`] when the file is ahead of this build.
pub fn upgrade(conn: &mut Connection) -> DbResult<()> {
    let found = stored_version(conn)?;
    let supported = schema_version();
    if found > supported {
        return Err(DbError::SchemaTooNew { found, supported });
    }

    let pending = &STEPS[found as usize..];
    if pending.is_empty() {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for sql in pending {
        tx.execute_batch(sql)?;
    }
    tx.pragma_update(None, "user_version", supported)?;
    tx.commit()?;

    info!("event=schema_upgrade module=db status=ok from={found} to={supported}");
    Ok(())
}

fn stored_version(conn: &Connection) -> DbResult<u32> {
    Ok(conn.pragma_query_value(None, "user_version", |row| row.get(0))?)
}

#[cfg(test)]
mod tests {
    use super::{schema_version, stored_version, upgrade};
    use rusqlite::Connection;

    #[test]
    fn upgrade_is_idempotent_on_fresh_connection() {
        let mut conn = Connection::open_in_memory().unwrap();
        assert_eq!(stored_version(&conn).unwrap(), 0);

        upgrade(&mut conn).unwrap();
        upgrade(&mut conn).unwrap();
        assert_eq!(stored_version(&conn).unwrap(), schema_version());
    }
}
