//! Text encodings for task-list bodies and the persisted note collection.
//!
//! # Responsibility
//! - Encode/decode a LIST-kind note body to and from an ordered task list.
//! - Encode/decode the whole note collection stored in the backing slot.
//!
//! # Invariants
//! - `decode_task_list(encode_task_list(s)) == s` for every finite `s`.
//! - Blank input decodes to an empty sequence, never an error.
//! - Task lists stay double-encoded: the collection is structured JSON, but
//!   each LIST body is a JSON string holding its own JSON array.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod collection;
pub mod task_list;

pub use collection::{decode_notes, encode_notes};
pub use task_list::{decode_task_list, encode_task_list};

pub type CodecResult<T> = Result<T, CodecError>;

/// Encoding/decoding failures.
#[derive(Debug)]
pub enum CodecError {
    /// Body is not a valid serialized task list.
    MalformedTaskList(serde_json::Error),
    /// Persisted collection blob is not a valid note array.
    MalformedCollection(serde_json::Error),
    /// Value could not be serialized.
    Encode(serde_json::Error),
}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedTaskList(err) => write!(f, "malformed task list body: {err}"),
            Self::MalformedCollection(err) => write!(f, "malformed note collection: {err}"),
            Self::Encode(err) => write!(f, "encoding failed: {err}"),
        }
    }
}

impl Error for CodecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MalformedTaskList(err) | Self::MalformedCollection(err) | Self::Encode(err) => {
                Some(err)
            }
        }
    }
}
