//! Task-list body codec.

use super::{CodecError, CodecResult};
use crate::model::task::TaskItem;

/// Serializes an ordered task sequence into one text blob.
pub fn encode_task_list(tasks: &[TaskItem]) -> CodecResult<String> {
    serde_json::to_string(tasks).map_err(CodecError::Encode)
}

/// Parses a task-list body.
///
/// Blank input yields an empty sequence. Anything else that is not a JSON
/// array of task records is `CodecError::MalformedTaskList`.
pub fn decode_task_list(body: &str) -> CodecResult<Vec<TaskItem>> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(body).map_err(CodecError::MalformedTaskList)
}
