//! PDF stream compression behind an injectable trait.
//!
//! Mirrors [`crate::pipeline::renderer`]: the pipeline hands PDF bytes to a
//! [`PdfCompressor`] and takes back re-encoded bytes. The default
//! implementation shells out to `qpdf`, which rewrites every stream object
//! with deflate compression. All temp buffers live in one request-scoped
//! [`TempDir`].
//!
//! Compression is best-effort at the pipeline level: `convert` logs a failed
//! compression and keeps the uncompressed bytes instead of aborting. Calling
//! a compressor directly still surfaces the error.

use crate::error::MdPressError;
use std::process::Command;
use tempfile::TempDir;
use tracing::{debug, info};

/// An external PDF re-encoder producing (ideally smaller) PDF bytes.
pub trait PdfCompressor: Send + Sync {
    fn compress(&self, pdf: &[u8]) -> Result<Vec<u8>, MdPressError>;
}

/// Default compressor: the `qpdf` command-line binary.
pub struct QpdfCompressor {
    binary: String,
}

impl QpdfCompressor {
    pub fn new() -> Self {
        Self {
            binary: "qpdf".to_string(),
        }
    }

    /// Use a specific binary path instead of resolving `qpdf` on PATH.
    pub fn with_binary(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl Default for QpdfCompressor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfCompressor for QpdfCompressor {
    fn compress(&self, pdf: &[u8]) -> Result<Vec<u8>, MdPressError> {
        let dir = TempDir::new()
            .map_err(|e| MdPressError::CompressionFailed { detail: format!("tempdir: {e}") })?;
        let input_path = dir.path().join("input.pdf");
        let output_path = dir.path().join("output.pdf");

        std::fs::write(&input_path, pdf).map_err(|e| MdPressError::CompressionFailed {
            detail: format!("temp pdf write: {e}"),
        })?;

        debug!("Invoking {} on {} bytes", self.binary, pdf.len());
        let output = Command::new(&self.binary)
            .args(["--compress-streams=y", "--object-streams=generate"])
            .arg(&input_path)
            .arg(&output_path)
            .output()
            .map_err(|e| MdPressError::CompressionFailed {
                detail: format!("failed to spawn '{}': {e}", self.binary),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(MdPressError::CompressionFailed {
                detail: format!("{} exited with {}: {}", self.binary, output.status, stderr.trim()),
            });
        }

        let compressed =
            std::fs::read(&output_path).map_err(|e| MdPressError::CompressionFailed {
                detail: format!("compressor produced no output file: {e}"),
            })?;
        info!("Compressed PDF: {} → {} bytes", pdf.len(), compressed.len());
        Ok(compressed)
    }
}
