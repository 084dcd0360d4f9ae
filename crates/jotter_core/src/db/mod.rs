//! SQLite host for the note backing slot.
//!
//! Opening a database always brings it to [`migrations::SCHEMA_VERSION`]
//! before any slot is read or written.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Failure while opening or upgrading the backing database.
#[derive(Debug)]
pub enum DbError {
    /// The file could not be opened or the connection configured.
    Connect(rusqlite::Error),
    /// Schema step `step` failed; earlier steps stay committed.
    Migrate { step: u32, source: rusqlite::Error },
    /// The file was written by a build with a newer schema.
    SchemaTooNew { found: u32, supported: u32 },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Connect(err) => write!(f, "cannot open note database: {err}"),
            Self::Migrate { step, source } => {
                write!(f, "note database upgrade to version {step} failed: {source}")
            }
            Self::SchemaTooNew { found, supported } => write!(
                f,
                "note database has schema version {found}; this build reads up to {supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Connect(err) | Self::Migrate { source: err, .. } => Some(err),
            Self::SchemaTooNew { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Connect(value)
    }
}
