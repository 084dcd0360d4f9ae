//! Backing key-value slot contract and SQLite implementation.
//!
//! # Responsibility
//! - Read and replace one opaque text value per string key.
//! - Report transport failures as `StoreError` instead of assuming success.
//!
//! # Invariants
//! - A slot write is a single statement: readers see the old or the new
//!   value, never a partial one.

use crate::codec::CodecError;
use crate::model::note::NoteId;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence error surfaced by store operations.
#[derive(Debug)]
pub enum StoreError {
    /// Slot read or write failed (unreadable, read-only, disk full...).
    Sqlite(rusqlite::Error),
    /// Collection could not be encoded or decoded.
    Codec(CodecError),
    /// Collection handed to `save_all` contains the same id twice.
    DuplicateId(NoteId),
    /// No identifier greater than the current maximum is representable.
    IdSpaceExhausted,
    /// Connection was not migrated; the slot table is absent.
    MissingSlotTable,
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "slot access failed: {err}"),
            Self::Codec(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "duplicate note id in collection: {id}"),
            Self::IdSpaceExhausted => write!(f, "note id space exhausted"),
            Self::MissingSlotTable => write!(f, "required table `kv_slots` is missing"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::Codec(err) => Some(err),
            Self::DuplicateId(_) | Self::IdSpaceExhausted | Self::MissingSlotTable => None,
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

impl From<CodecError> for StoreError {
    fn from(value: CodecError) -> Self {
        Self::Codec(value)
    }
}

/// String-keyed slot storage.
pub trait SlotStore {
    /// Returns the slot value, or `None` when the slot was never written.
    fn read_slot(&self, key: &str) -> StoreResult<Option<String>>;
    /// Replaces the slot value.
    fn write_slot(&self, key: &str, value: &str) -> StoreResult<()>;
}

/// SQLite-backed slot storage over the `kv_slots` table.
pub struct SqliteSlotStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSlotStore<'conn> {
    /// Wraps a migrated connection.
    ///
    /// # Errors
    /// - `StoreError::MissingSlotTable` when the connection was not opened
    ///   through `db::open_db*`.
    pub fn try_new(conn: &'conn Connection) -> StoreResult<Self> {
        let exists: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = 'kv_slots'
            );",
            [],
            |row| row.get(0),
        )?;
        if exists != 1 {
            return Err(StoreError::MissingSlotTable);
        }
        Ok(Self { conn })
    }
}

impl SlotStore for SqliteSlotStore<'_> {
    fn read_slot(&self, key: &str) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_slots WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write_slot(&self, key: &str, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO kv_slots (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }
}
