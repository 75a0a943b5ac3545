//! Protocol frame decoding.
//!
//! Strips the numeric envelope off a raw frame and hands the payload to a
//! general-purpose JSON parser. The header is matched by a single anchored
//! pattern of digits and literal separators, and payload parsing starts at
//! the first character after that match — so delimiter-like substrings
//! inside the payload (URLs containing `://` and the like) can never shift
//! the payload boundary.
//!
//! Two envelope shapes are recognized:
//!
//! - `<msgId>:::<seq>+<jsonArray>` — snapshot and update frames
//! - `<msgId>:::<jsonObject>` — named events, e.g. OT errors

use log::debug;
use regex::Regex;
use serde_json::Value;
use thiserror::Error;

/// Event name the collaboration service uses for rejected OT updates.
const OT_ERROR_EVENT: &str = "otUpdateError";

/// What a decoded frame carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    /// Project metadata with the nested folder tree.
    Snapshot,
    /// Full-text document snapshot with a version number.
    Update,
    /// Named OT error event.
    ErrorEvent,
}

/// A frame with its envelope stripped.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedFrame {
    pub kind: FrameKind,
    pub msg_id: u64,
    pub seq: Option<u64>,
    pub payload: Value,
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("frame header does not match the envelope pattern")]
    InvalidEnvelope,
    #[error("frame payload is not valid JSON: {0}")]
    InvalidPayload(#[from] serde_json::Error),
    #[error("unexpected payload shape: {0}")]
    UnexpectedShape(&'static str),
}

pub struct FrameDecoder {
    header: Regex,
}

impl Default for FrameDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameDecoder {
    pub fn new() -> Self {
        // Anchored, and made of digits and literal separators only; payload
        // content never participates in the match.
        let header = Regex::new(r"^(\d+):::(?:(\d+)\+)?").expect("envelope pattern compiles");
        Self { header }
    }

    /// Decode one raw frame into its kind and generic payload tree.
    pub fn decode(&self, raw: &str) -> Result<DecodedFrame, DecodeError> {
        let caps = self
            .header
            .captures(raw)
            .ok_or(DecodeError::InvalidEnvelope)?;
        let msg_id = caps[1].parse().map_err(|_| DecodeError::InvalidEnvelope)?;
        let seq = caps
            .get(2)
            .map(|m| m.as_str().parse())
            .transpose()
            .map_err(|_| DecodeError::InvalidEnvelope)?;
        let payload: Value = serde_json::from_str(&raw[caps.get(0).unwrap().end()..])?;
        let kind = classify(&payload)?;
        debug!("decoded frame kind={kind:?} msg_id={msg_id} seq={seq:?}");
        Ok(DecodedFrame {
            kind,
            msg_id,
            seq,
            payload,
        })
    }
}

fn classify(payload: &Value) -> Result<FrameKind, DecodeError> {
    match payload {
        // Positional array payloads carry the interesting value at index 1:
        // an object for project snapshots, a line array for doc updates.
        Value::Array(items) => match items.get(1) {
            Some(Value::Object(_)) => Ok(FrameKind::Snapshot),
            Some(Value::Array(_)) => Ok(FrameKind::Update),
            _ => Err(DecodeError::UnexpectedShape(
                "array payload carries neither a project nor a line array",
            )),
        },
        Value::Object(fields) => match fields.get("name").and_then(Value::as_str) {
            Some(OT_ERROR_EVENT) => Ok(FrameKind::ErrorEvent),
            Some(_) => Err(DecodeError::UnexpectedShape("unrecognized event name")),
            None => Err(DecodeError::UnexpectedShape("event payload without a name")),
        },
        _ => Err(DecodeError::UnexpectedShape(
            "payload is neither an array nor an object",
        )),
    }
}
