//! Top-level conversion entry points.
//!
//! [`convert`] runs the whole pipeline in memory and returns the artifacts;
//! [`convert_to_dir`] additionally writes each artifact to disk with its
//! resolved file name. Both are synchronous and blocking: one conversion
//! runs to completion (or failure) per call, there are no suspension points,
//! and every temp buffer is scoped inside the renderer/compressor
//! invocations it serves.

use crate::config::RenderConfig;
use crate::document::Document;
use crate::error::MdPressError;
use crate::output::{ConversionOutput, RenderedArtifact};
use crate::pipeline::compress::{PdfCompressor, QpdfCompressor};
use crate::pipeline::renderer::{HtmlToPdf, RenderOptions, WkhtmltopdfRenderer};
use crate::pipeline::{docx, filename, style, toc};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Convert a Markdown document to a styled PDF, plus optional HTML/DOCX
/// sibling artifacts.
///
/// This is the primary entry point for the library.
///
/// # Errors
/// Any stage failure aborts the conversion and surfaces as one
/// [`MdPressError`]; no partial artifacts are returned. The single
/// exception is compression, which falls back to the uncompressed PDF
/// bytes when the compressor fails.
pub fn convert(
    document: &Document,
    config: &RenderConfig,
) -> Result<ConversionOutput, MdPressError> {
    let start = Instant::now();

    if document.text.trim().is_empty() {
        return Err(MdPressError::EmptyDocument);
    }
    info!(
        "Starting conversion: {} bytes of Markdown",
        document.text.len()
    );

    // ── Step 1: Markdown → HTML ──────────────────────────────────────────
    let html = comrak::markdown_to_html(&document.text, &comrak::Options::default());

    // ── Step 2: TOC injection ────────────────────────────────────────────
    let body = if config.toc {
        let (toc_html, rewritten, entries) = toc::build_toc(&document.text, &html);
        debug!("TOC: {} entries", entries.len());
        format!("{toc_html}{rewritten}")
    } else {
        html
    };

    // ── Step 3: Style composition and wrapping ───────────────────────────
    let style_block = style::compose_style(config);
    let final_html = style::wrap_document(&style_block, config.watermark.as_deref(), &body);

    // ── Step 4: PDF rendering ────────────────────────────────────────────
    let options = RenderOptions::from_config(config);
    let renderer = resolve_renderer(config);
    let pdf = renderer.render(&final_html, &options)?;

    // ── Step 5: Optional compression (best-effort) ───────────────────────
    let pdf = if config.compress {
        match resolve_compressor(config).compress(&pdf) {
            Ok(compressed) => compressed,
            Err(e) => {
                warn!("Compression failed, keeping uncompressed PDF: {e}");
                pdf
            }
        }
    } else {
        pdf
    };

    // ── Step 6: Assemble artifacts ───────────────────────────────────────
    let base_name = filename::resolve_base_name(&document.text, document.source_name.as_deref());
    let output = ConversionOutput {
        pdf: RenderedArtifact::new(pdf, &base_name, "pdf"),
        html: config
            .export_html
            .then(|| RenderedArtifact::new(final_html.into_bytes(), &base_name, "html")),
        docx: match config.export_docx {
            true => Some(RenderedArtifact::new(
                docx::write_docx(&document.text)?,
                &base_name,
                "docx",
            )),
            false => None,
        },
        base_name,
    };

    info!(
        "Conversion complete: '{}', {} bytes of PDF, {}ms",
        output.pdf.filename,
        output.pdf.bytes.len(),
        start.elapsed().as_millis()
    );
    Ok(output)
}

/// Convert a document and write every artifact into `dir`.
///
/// Each artifact is written atomically (temp file in the same directory,
/// then rename) so a failing write never leaves a partial file behind.
/// Returns the paths written, PDF first.
pub fn convert_to_dir(
    document: &Document,
    dir: impl AsRef<Path>,
    config: &RenderConfig,
) -> Result<Vec<PathBuf>, MdPressError> {
    let output = convert(document, config)?;
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir).map_err(|e| MdPressError::OutputWriteFailed {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut written = Vec::new();
    for artifact in output.artifacts() {
        let path = dir.join(&artifact.filename);
        write_atomic(&path, &artifact.bytes)?;
        written.push(path);
    }
    Ok(written)
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), MdPressError> {
    let map_err = |e: std::io::Error| MdPressError::OutputWriteFailed {
        path: path.to_path_buf(),
        source: e,
    };
    let tmp_path = path.with_extension("tmp");
    std::fs::write(&tmp_path, bytes).map_err(map_err)?;
    std::fs::rename(&tmp_path, path).map_err(map_err)?;
    Ok(())
}

// ── Internal helpers ─────────────────────────────────────────────────────

/// Resolve the HTML-to-PDF renderer: the injected one when present,
/// otherwise the wkhtmltopdf subprocess.
fn resolve_renderer(config: &RenderConfig) -> Arc<dyn HtmlToPdf> {
    match &config.renderer {
        Some(renderer) => Arc::clone(renderer),
        None => Arc::new(WkhtmltopdfRenderer::new()),
    }
}

/// Resolve the PDF compressor: the injected one when present, otherwise the
/// qpdf subprocess.
fn resolve_compressor(config: &RenderConfig) -> Arc<dyn PdfCompressor> {
    match &config.compressor {
        Some(compressor) => Arc::clone(compressor),
        None => Arc::new(QpdfCompressor::new()),
    }
}
