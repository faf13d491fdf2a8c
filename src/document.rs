//! Document input type.
//!
//! A [`Document`] is the immutable input to the pipeline: the raw Markdown
//! text plus, when the text came from an uploaded file, the original file
//! name. The name only matters for output-filename resolution
//! ([`crate::pipeline::filename`]); the text is never re-read from disk
//! after construction.

use crate::error::MdPressError;
use std::path::Path;
use tracing::debug;

/// Raw Markdown input to a conversion.
#[derive(Debug, Clone)]
pub struct Document {
    /// The Markdown text, UTF-8.
    pub text: String,
    /// Original file name (`notes.md`), if the text was read from a file.
    pub source_name: Option<String>,
}

impl Document {
    /// Build a document from Markdown text typed or assembled in memory.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source_name: None,
        }
    }

    /// Read a document from a `.md` file, recording its file name.
    ///
    /// # Errors
    /// [`MdPressError::FileNotFound`] if the path cannot be read,
    /// [`MdPressError::InvalidEncoding`] if the contents are not UTF-8.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, MdPressError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|_| MdPressError::FileNotFound {
            path: path.to_path_buf(),
        })?;
        let text = String::from_utf8(bytes).map_err(|_| MdPressError::InvalidEncoding {
            path: path.to_path_buf(),
        })?;
        let source_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned());
        debug!("Read {} bytes from {}", text.len(), path.display());
        Ok(Self { text, source_name })
    }
}
