//! Pipeline stages for Markdown-to-PDF conversion.
//!
//! Each submodule implements exactly one transformation step. Every stage is
//! a pure function over the document and the configuration bundle; no stage
//! depends on another's runtime state, which keeps each independently
//! testable and lets tests swap the external collaborators for fakes.
//!
//! ## Data Flow
//!
//! ```text
//! markdown ──▶ html ──▶ toc ──▶ style/wrap ──▶ renderer ──▶ compress
//!  (comrak)           (anchors)  (watermark)  (wkhtmltopdf)   (qpdf)
//! ```
//!
//! 1. [`toc`]      — heading scan, slug anchors, TOC list, literal heading
//!    rewriting in the rendered HTML
//! 2. [`style`]    — theme presets, `<style>` composition, watermark overlay,
//!    final HTML wrapping
//! 3. [`filename`] — output base-name resolution (leading H1 → upload name →
//!    timestamp)
//! 4. [`renderer`] — the injectable HTML-to-PDF seam; default wkhtmltopdf
//!    subprocess
//! 5. [`compress`] — the injectable PDF re-encoder seam; default qpdf
//!    subprocess
//! 6. [`docx`]     — minimal single-paragraph OOXML companion artifact

pub mod compress;
pub mod docx;
pub mod filename;
pub mod renderer;
pub mod style;
pub mod toc;
