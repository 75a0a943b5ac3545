//! Named-event reading.

use serde_json::Value;

use crate::frame::{DecodeError, DecodedFrame, FrameKind};

/// Extract the human-readable message of an OT error event.
///
/// Returns `args[0]` exactly as transmitted; non-ASCII content comes
/// through untouched.
pub fn error_message(frame: &DecodedFrame) -> Result<String, DecodeError> {
    if frame.kind != FrameKind::ErrorEvent {
        return Err(DecodeError::UnexpectedShape("not an error event frame"));
    }
    let args = frame
        .payload
        .get("args")
        .and_then(Value::as_array)
        .ok_or(DecodeError::UnexpectedShape("error event without args"))?;
    args.first()
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(DecodeError::UnexpectedShape(
            "error event args do not start with a message",
        ))
}
