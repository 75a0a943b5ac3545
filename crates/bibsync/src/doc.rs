//! Document snapshot reading.

use serde_json::Value;

use crate::frame::{DecodeError, DecodedFrame, FrameKind};

/// Full text and service-assigned version of one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocSnapshot {
    pub text: String,
    pub version: u64,
}

/// Read the full text and version out of an update frame.
///
/// The payload is positional: `[null, lines, version, ...]`. The text is
/// the line array joined with `\n` — a plain join, so a trailing empty line
/// element reproduces the document's trailing newline and the original
/// layout comes back byte for byte.
pub fn read_snapshot(frame: &DecodedFrame) -> Result<DocSnapshot, DecodeError> {
    if frame.kind != FrameKind::Update {
        return Err(DecodeError::UnexpectedShape("not an update frame"));
    }
    let items = frame
        .payload
        .as_array()
        .ok_or(DecodeError::UnexpectedShape("update payload is not an array"))?;
    if items.len() < 3 {
        return Err(DecodeError::UnexpectedShape(
            "update payload has too few elements",
        ));
    }
    let lines = items[1]
        .as_array()
        .ok_or(DecodeError::UnexpectedShape("update payload without a line array"))?;
    let mut parts = Vec::with_capacity(lines.len());
    for line in lines {
        parts.push(
            line.as_str()
                .ok_or(DecodeError::UnexpectedShape("line element is not a string"))?,
        );
    }
    let version = items[2].as_u64().ok_or(DecodeError::UnexpectedShape(
        "version is not a non-negative integer",
    ))?;
    Ok(DocSnapshot {
        text: parts.join("\n"),
        version,
    })
}
