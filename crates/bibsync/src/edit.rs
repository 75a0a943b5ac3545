//! Edit value types and sequential application.
//!
//! An [`Edit`] is one insert or delete at a document offset. Positions are
//! measured in Unicode scalar values and interpreted against the *evolving*
//! document: each edit assumes all earlier edits in its sequence have
//! already been applied.

use thiserror::Error;

/// Direction of a single edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOp {
    Insert,
    Delete,
}

/// One insert or delete operation with its document offset and the exact
/// characters gained or lost there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub content: String,
    pub position: usize,
    pub operation: EditOp,
}

impl Edit {
    pub fn insert(content: impl Into<String>, position: usize) -> Self {
        Self {
            content: content.into(),
            position,
            operation: EditOp::Insert,
        }
    }

    pub fn delete(content: impl Into<String>, position: usize) -> Self {
        Self {
            content: content.into(),
            position,
            operation: EditOp::Delete,
        }
    }

    /// Length of the edited span in chars.
    pub fn span(&self) -> usize {
        self.content.chars().count()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplyError {
    #[error("edit at position {position} does not fit a document of length {len}")]
    OutOfBounds { position: usize, len: usize },
    #[error("deleted text at position {position} does not match the document")]
    DeleteMismatch { position: usize },
}

/// Apply a sequence of edits in order.
///
/// Inserts splice `content` in at `position`; deletes verify that the
/// document actually holds `content` at `position` before removing it, the
/// same check the collaboration service applies on its side.
pub fn apply(text: &str, edits: &[Edit]) -> Result<String, ApplyError> {
    let mut doc: Vec<char> = text.chars().collect();
    for edit in edits {
        let span = edit.span();
        match edit.operation {
            EditOp::Insert => {
                if edit.position > doc.len() {
                    return Err(ApplyError::OutOfBounds {
                        position: edit.position,
                        len: doc.len(),
                    });
                }
                doc.splice(edit.position..edit.position, edit.content.chars());
            }
            EditOp::Delete => {
                if edit.position + span > doc.len() {
                    return Err(ApplyError::OutOfBounds {
                        position: edit.position,
                        len: doc.len(),
                    });
                }
                let held = &doc[edit.position..edit.position + span];
                if !held.iter().copied().eq(edit.content.chars()) {
                    return Err(ApplyError::DeleteMismatch {
                        position: edit.position,
                    });
                }
                doc.drain(edit.position..edit.position + span);
            }
        }
    }
    Ok(doc.into_iter().collect())
}
