//! Read-only document snapshot.

use std::fs;
use std::io;

use crate::core::error::{DocTagsError, Result};
use crate::core::indexer::walker::DocumentPath;

/// A document read once for the duration of an indexing pass
#[derive(Debug, Clone)]
pub struct Document {
    /// Path relative to the base directory, `/`-separated
    pub path: String,
    text: String,
}

impl Document {
    /// Build a document from in-memory text
    pub fn new(path: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    /// Read a qualifying document from disk
    ///
    /// Fails with `ReadError` if the file cannot be opened or is not UTF-8.
    pub fn read(location: &DocumentPath) -> Result<Self> {
        let text = fs::read_to_string(&location.absolute).map_err(|e| {
            if e.kind() == io::ErrorKind::InvalidData {
                DocTagsError::ReadError(format!("{} is not valid UTF-8 text", location.relative))
            } else {
                DocTagsError::ReadError(format!("Failed to read {}: {e}", location.relative))
            }
        })?;

        Ok(Self::new(location.relative.clone(), text))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lines in order; a final newline yields no trailing empty line
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }
}
