//! Project snapshot reading.
//!
//! Walks the recursively nested folder tree of a snapshot frame and builds
//! a registry of the project's bibliography documents, keyed by name.

use std::collections::HashMap;

use log::trace;
use serde_json::Value;

use crate::frame::{DecodeError, DecodedFrame, FrameKind};

/// Default extension for bibliography documents.
pub const DEFAULT_EXTENSION: &str = ".bib";

/// Builds name → id registries of bibliography documents.
#[derive(Debug, Clone)]
pub struct ProjectReader {
    extension: String,
}

impl Default for ProjectReader {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl ProjectReader {
    /// Reader keeping only documents whose name ends with `extension`.
    pub fn with_extension(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
        }
    }

    /// Build the name → id registry from a snapshot frame.
    ///
    /// The registry is unordered; if two documents share a name, the entry
    /// encountered later in the tree walk wins. Non-document entries
    /// (`fileRefs`) and names with other extensions are skipped.
    pub fn doc_registry(&self, frame: &DecodedFrame) -> Result<HashMap<String, String>, DecodeError> {
        Ok(self.collect_docs(frame)?.into_iter().collect())
    }

    /// Id of the first matching document in tree order, for callers that
    /// open a project holding a single bibliography.
    pub fn first_doc_id(&self, frame: &DecodedFrame) -> Result<Option<String>, DecodeError> {
        Ok(self.collect_docs(frame)?.into_iter().next().map(|(_, id)| id))
    }

    fn collect_docs(&self, frame: &DecodedFrame) -> Result<Vec<(String, String)>, DecodeError> {
        if frame.kind != FrameKind::Snapshot {
            return Err(DecodeError::UnexpectedShape("not a snapshot frame"));
        }
        let project = frame
            .payload
            .get(1)
            .and_then(Value::as_object)
            .ok_or(DecodeError::UnexpectedShape(
                "snapshot payload without a project object",
            ))?;
        let root = project
            .get("rootFolder")
            .and_then(Value::as_array)
            .ok_or(DecodeError::UnexpectedShape("project without a rootFolder"))?;

        let mut docs = Vec::new();
        for folder in root {
            self.walk(folder, &mut docs)?;
        }
        Ok(docs)
    }

    fn walk(&self, folder: &Value, docs: &mut Vec<(String, String)>) -> Result<(), DecodeError> {
        let folder = folder
            .as_object()
            .ok_or(DecodeError::UnexpectedShape("folder entry is not an object"))?;

        if let Some(entries) = folder.get("docs") {
            let entries = entries
                .as_array()
                .ok_or(DecodeError::UnexpectedShape("docs is not an array"))?;
            for entry in entries {
                let id = entry
                    .get("_id")
                    .and_then(Value::as_str)
                    .ok_or(DecodeError::UnexpectedShape("doc entry without an _id"))?;
                let name = entry
                    .get("name")
                    .and_then(Value::as_str)
                    .ok_or(DecodeError::UnexpectedShape("doc entry without a name"))?;
                if name.ends_with(&self.extension) {
                    trace!("registered doc {name} ({id})");
                    docs.push((name.to_string(), id.to_string()));
                }
            }
        }

        if let Some(nested) = folder.get("folders") {
            let nested = nested
                .as_array()
                .ok_or(DecodeError::UnexpectedShape("folders is not an array"))?;
            for child in nested {
                self.walk(child, docs)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::FrameDecoder;

    fn snapshot(raw: &str) -> DecodedFrame {
        FrameDecoder::new().decode(raw).unwrap()
    }

    #[test]
    fn collects_docs_across_nested_folders() {
        let frame = snapshot(
            r#"6:::1+[null,{"rootFolder":[{"_id":"r","name":"rootFolder","folders":[{"_id":"f","name":"sub","folders":[],"fileRefs":[],"docs":[{"_id":"C","name":"deep.bib"}]}],"fileRefs":[{"_id":"X","name":"universe.jpg"}],"docs":[{"_id":"A","name":"main.tex"},{"_id":"B","name":"references.bib"}]}]},"owner",2]"#,
        );
        let registry = ProjectReader::default().doc_registry(&frame).unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry["references.bib"], "B");
        assert_eq!(registry["deep.bib"], "C");
    }

    #[test]
    fn later_duplicate_names_win() {
        let frame = snapshot(
            r#"6:::1+[null,{"rootFolder":[{"docs":[{"_id":"A","name":"refs.bib"}],"folders":[{"docs":[{"_id":"B","name":"refs.bib"}],"folders":[]}]}]},"owner",2]"#,
        );
        let registry = ProjectReader::default().doc_registry(&frame).unwrap();
        assert_eq!(registry["refs.bib"], "B");
    }

    #[test]
    fn extension_filter_is_configurable() {
        let frame = snapshot(
            r#"6:::1+[null,{"rootFolder":[{"docs":[{"_id":"A","name":"notes.org"},{"_id":"B","name":"refs.bib"}],"folders":[]}]},"owner",2]"#,
        );
        let registry = ProjectReader::with_extension(".org")
            .doc_registry(&frame)
            .unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry["notes.org"], "A");
    }

    #[test]
    fn first_doc_id_follows_tree_order() {
        let frame = snapshot(
            r#"6:::1+[null,{"rootFolder":[{"docs":[{"_id":"A","name":"one.bib"},{"_id":"B","name":"two.bib"}],"folders":[]}]},"owner",2]"#,
        );
        let reader = ProjectReader::default();
        assert_eq!(reader.first_doc_id(&frame).unwrap(), Some("A".to_string()));
    }

    #[test]
    fn missing_root_folder_is_an_unexpected_shape() {
        let frame = snapshot(r#"6:::1+[null,{"name":"Test"},"owner",2]"#);
        assert!(matches!(
            ProjectReader::default().doc_registry(&frame),
            Err(DecodeError::UnexpectedShape(_))
        ));
    }

    #[test]
    fn doc_entries_without_ids_are_an_unexpected_shape() {
        let frame = snapshot(
            r#"6:::1+[null,{"rootFolder":[{"docs":[{"name":"refs.bib"}],"folders":[]}]},"owner",2]"#,
        );
        assert!(matches!(
            ProjectReader::default().doc_registry(&frame),
            Err(DecodeError::UnexpectedShape(_))
        ));
    }
}
