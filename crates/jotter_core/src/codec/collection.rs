//! Note collection codec for the backing slot.

use super::{CodecError, CodecResult};
use crate::model::note::Note;

/// Serializes the full note collection.
pub fn encode_notes(notes: &[Note]) -> CodecResult<String> {
    serde_json::to_string(notes).map_err(CodecError::Encode)
}

/// Parses a persisted collection blob. Blank input is an empty collection.
pub fn decode_notes(blob: &str) -> CodecResult<Vec<Note>> {
    if blob.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(blob).map_err(CodecError::MalformedCollection)
}
