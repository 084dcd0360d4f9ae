//! Schema steps for the backing database.
//!
//! Step `n` (1-based) upgrades a database at version `n - 1` to `n`. Each
//! step commits together with its `PRAGMA user_version` bump, so a failed
//! step leaves the database at the last good version.

use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::Connection;

const STEPS: &[&str] = &[include_str!("0001_kv_slots.sql")];

/// Schema version this build writes.
pub const SCHEMA_VERSION: u32 = STEPS.len() as u32;

/// Reads the schema version recorded in the database.
pub fn schema_version(conn: &Connection) -> rusqlite::Result<u32> {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
}

/// Runs every step above the recorded version.
///
/// # Errors
/// - `DbError::SchemaTooNew` when the file is ahead of this build.
/// - `DbError::Migrate` naming the step that failed.
pub fn migrate(conn: &mut Connection) -> DbResult<()> {
    let found = schema_version(conn)?;
    if found > SCHEMA_VERSION {
        return Err(DbError::SchemaTooNew {
            found,
            supported: SCHEMA_VERSION,
        });
    }

    for (step, sql) in (1..).zip(STEPS).skip(found as usize) {
        run_step(conn, step, sql).map_err(|source| DbError::Migrate { step, source })?;
        info!("event=db_migrate module=db status=ok step={step}");
    }
    Ok(())
}

fn run_step(conn: &mut Connection, step: u32, sql: &str) -> rusqlite::Result<()> {
    let tx = conn.transaction()?;
    tx.execute_batch(sql)?;
    tx.pragma_update(None, "user_version", step)?;
    tx.commit()
}
