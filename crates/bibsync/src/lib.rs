//! bibsync — bridge between a local bibliography manager and a real-time
//! collaborative-editing service.
//!
//! Decodes inbound protocol frames (project metadata snapshots, full-text
//! document snapshots, OT error events) and computes minimal ordered
//! insert/delete edit sequences between two document snapshots for the
//! service's operational-transform engine.
//!
//! Every component is a pure, synchronous computation: no I/O, no shared
//! state, safe to call concurrently. The network transport, session
//! lifecycle, and the remote merge protocol live outside this crate.

pub mod diff;
pub mod doc;
pub mod edit;
pub mod event;
pub mod frame;
pub mod project;

pub use diff::diff;
pub use doc::{read_snapshot, DocSnapshot};
pub use edit::{apply, ApplyError, Edit, EditOp};
pub use event::error_message;
pub use frame::{DecodeError, DecodedFrame, FrameDecoder, FrameKind};
pub use project::{ProjectReader, DEFAULT_EXTENSION};
