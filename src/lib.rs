//! # mdpress
//!
//! Convert Markdown documents to styled PDF, with optional HTML and DOCX
//! sibling artifacts.
//!
//! ## Pipeline Overview
//!
//! ```text
//! Markdown
//!  │
//!  ├─ 1. Parse     Markdown → HTML (comrak)
//!  ├─ 2. TOC       heading scan, slug anchors, literal heading rewriting
//!  ├─ 3. Style     theme preset + font rules + custom CSS + page breaks
//!  ├─ 4. Wrap      <html> shell with optional watermark overlay
//!  ├─ 5. Render    HTML → PDF via the injected renderer (wkhtmltopdf)
//!  ├─ 6. Compress  optional stream re-encoding via qpdf (best-effort)
//!  └─ 7. Output    PDF artifact + optional HTML / DOCX siblings
//! ```
//!
//! The whole pipeline is synchronous and request-scoped: each call to
//! [`convert`] owns its document, its configuration, and its temporary
//! buffers, and nothing persists between calls.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mdpress::{convert, Document, RenderConfig, Theme};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let doc = Document::from_text("# My Report\n\nHello, **world**.");
//!     let config = RenderConfig::builder()
//!         .theme(Theme::GitHub)
//!         .toc(true)
//!         .page_numbers(true)
//!         .build()?;
//!     let output = convert(&doc, &config)?;
//!     std::fs::write(&output.pdf.filename, &output.pdf.bytes)?;
//!     Ok(())
//! }
//! ```
//!
//! ## External collaborators
//!
//! PDF rendering and compression are subprocess calls (`wkhtmltopdf`,
//! `qpdf`) behind the [`HtmlToPdf`] and [`PdfCompressor`] traits. Inject
//! your own implementation through [`RenderConfig::builder`] to embed a
//! different renderer or to test the pipeline with deterministic bytes.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod document;
pub mod error;
pub mod output;
pub mod pipeline;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{Orientation, PaperSize, RenderConfig, RenderConfigBuilder, Theme};
pub use convert::{convert, convert_to_dir};
pub use document::Document;
pub use error::MdPressError;
pub use output::{ConversionOutput, RenderedArtifact};
pub use pipeline::compress::{PdfCompressor, QpdfCompressor};
pub use pipeline::renderer::{HtmlToPdf, RenderOptions, WkhtmltopdfRenderer, PAGE_NUMBER_TEMPLATE};
pub use pipeline::toc::{slugify, HeadingEntry};
