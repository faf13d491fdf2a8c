//! Error types for the mdpress library.
//!
//! A single fatal error type covers the whole pipeline: a conversion either
//! produces every requested artifact or fails with one [`MdPressError`].
//! There is no partial-success reporting and no retry machinery — callers
//! surface `err.to_string()` as the one user-facing failure message.
//!
//! Compression is the only stage with a softer policy: a failing compressor
//! is logged and the uncompressed PDF bytes are kept, so
//! [`MdPressError::CompressionFailed`] only reaches callers who invoke the
//! compressor directly.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the mdpress library.
#[derive(Debug, Error)]
pub enum MdPressError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// The document contains no renderable text.
    #[error("Document is empty — nothing to convert.")]
    EmptyDocument,

    /// Input file was not found at the given path.
    #[error("Markdown file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// The input file is not valid UTF-8.
    #[error("File '{path}' is not valid UTF-8.\nRe-save the document as UTF-8 and try again.")]
    InvalidEncoding { path: PathBuf },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Render errors ─────────────────────────────────────────────────────
    /// The HTML-to-PDF binary could not be spawned.
    #[error(
        "HTML-to-PDF renderer '{binary}' was not found on PATH.\n\
         Install wkhtmltopdf (https://wkhtmltopdf.org) or inject a custom\n\
         renderer via RenderConfig::builder().renderer(...)."
    )]
    RendererNotFound { binary: String },

    /// The external renderer ran but reported failure.
    #[error("PDF rendering failed: {detail}")]
    RenderFailed { detail: String },

    // ── Compression errors ────────────────────────────────────────────────
    /// The PDF compressor failed or produced no output.
    #[error("PDF compression failed: {detail}")]
    CompressionFailed { detail: String },

    // ── DOCX errors ───────────────────────────────────────────────────────
    /// The DOCX package could not be assembled.
    #[error("DOCX export failed: {detail}")]
    DocxWriteFailed { detail: String },

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not create or write an output artifact file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}
