//! Configuration types for Markdown-to-PDF conversion.
//!
//! All conversion behaviour is controlled through [`RenderConfig`], built via
//! its [`RenderConfigBuilder`]. Keeping every knob in one struct mirrors the
//! original web form: one configuration bundle is constructed per conversion
//! request and never mutated afterwards.
//!
//! # Design choice: builder over constructor
//! A fifteen-field constructor is unreadable and breaks on every new field.
//! The builder lets callers set only what they care about and rely on
//! documented defaults for the rest.

use crate::error::MdPressError;
use crate::pipeline::compress::PdfCompressor;
use crate::pipeline::renderer::HtmlToPdf;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Configuration for one Markdown-to-PDF conversion.
///
/// Built via [`RenderConfig::builder()`] or using
/// [`RenderConfig::default()`].
///
/// # Example
/// ```rust
/// use mdpress::{RenderConfig, Theme, PaperSize};
///
/// let config = RenderConfig::builder()
///     .theme(Theme::GitHub)
///     .font_size(11)
///     .paper_size(PaperSize::Letter)
///     .toc(true)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct RenderConfig {
    /// Body font family. Default: "Arial".
    ///
    /// Emitted verbatim into the composed `<style>` block; the renderer falls
    /// back to its platform default when the face is not installed.
    pub font_family: String,

    /// Body font size in points. Range: 8–20. Default: 12.
    pub font_size: u8,

    /// Named style theme. Default: [`Theme::Default`] (no extra CSS).
    pub theme: Theme,

    /// Start a new page before every H1 heading. Default: false.
    ///
    /// Implemented as `h1 { page-break-before: always }` in the composed
    /// style block, so it applies to rendered headings, not source lines.
    pub split_pages: bool,

    /// Add `page/total` page numbers to the footer. Default: false.
    pub page_numbers: bool,

    /// Physical page size. Default: [`PaperSize::A4`].
    pub paper_size: PaperSize,

    /// Page orientation. Default: [`Orientation::Portrait`].
    pub orientation: Orientation,

    /// Optional centred header text on every page.
    pub header: Option<String>,

    /// Optional centred footer text on every page.
    pub footer: Option<String>,

    /// Optional watermark text, rendered as a rotated low-opacity overlay
    /// behind the content. Empty text produces no overlay.
    ///
    /// The text is injected into the wrapper HTML verbatim — same trust
    /// level as the document author.
    pub watermark: Option<String>,

    /// Free-form CSS appended to the composed style block verbatim.
    ///
    /// Not sanitised. The custom CSS executes with the same trust level as
    /// the document itself; embedders exposing this field to untrusted users
    /// must filter it upstream.
    pub custom_css: Option<String>,

    /// Prepend a generated Table of Contents and attach matching `id`
    /// anchors to rendered headings. Default: false.
    pub toc: bool,

    /// Re-encode the rendered PDF through the stream compressor. Default: false.
    ///
    /// A failing compressor is logged and the uncompressed bytes are kept;
    /// compression never aborts a conversion.
    pub compress: bool,

    /// Also emit the wrapped HTML as a sibling artifact. Default: false.
    pub export_html: bool,

    /// Also emit a minimal single-paragraph DOCX of the raw Markdown text.
    /// Default: false.
    pub export_docx: bool,

    /// Injected HTML-to-PDF renderer. Takes precedence over the default
    /// wkhtmltopdf subprocess. Useful in tests or when embedding a
    /// browser-based renderer.
    pub renderer: Option<Arc<dyn HtmlToPdf>>,

    /// Injected PDF compressor. Takes precedence over the default qpdf
    /// subprocess.
    pub compressor: Option<Arc<dyn PdfCompressor>>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            font_family: "Arial".to_string(),
            font_size: 12,
            theme: Theme::Default,
            split_pages: false,
            page_numbers: false,
            paper_size: PaperSize::A4,
            orientation: Orientation::Portrait,
            header: None,
            footer: None,
            watermark: None,
            custom_css: None,
            toc: false,
            compress: false,
            export_html: false,
            export_docx: false,
            renderer: None,
            compressor: None,
        }
    }
}

impl fmt::Debug for RenderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderConfig")
            .field("font_family", &self.font_family)
            .field("font_size", &self.font_size)
            .field("theme", &self.theme)
            .field("split_pages", &self.split_pages)
            .field("page_numbers", &self.page_numbers)
            .field("paper_size", &self.paper_size)
            .field("orientation", &self.orientation)
            .field("header", &self.header)
            .field("footer", &self.footer)
            .field("watermark", &self.watermark)
            .field("custom_css", &self.custom_css)
            .field("toc", &self.toc)
            .field("compress", &self.compress)
            .field("export_html", &self.export_html)
            .field("export_docx", &self.export_docx)
            .field("renderer", &self.renderer.as_ref().map(|_| "<dyn HtmlToPdf>"))
            .field(
                "compressor",
                &self.compressor.as_ref().map(|_| "<dyn PdfCompressor>"),
            )
            .finish()
    }
}

impl RenderConfig {
    /// Create a new builder for `RenderConfig`.
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`RenderConfig`].
#[derive(Debug)]
pub struct RenderConfigBuilder {
    config: RenderConfig,
}

impl RenderConfigBuilder {
    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.config.font_family = family.into();
        self
    }

    pub fn font_size(mut self, pt: u8) -> Self {
        self.config.font_size = pt;
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.config.theme = theme;
        self
    }

    pub fn split_pages(mut self, v: bool) -> Self {
        self.config.split_pages = v;
        self
    }

    pub fn page_numbers(mut self, v: bool) -> Self {
        self.config.page_numbers = v;
        self
    }

    pub fn paper_size(mut self, size: PaperSize) -> Self {
        self.config.paper_size = size;
        self
    }

    pub fn orientation(mut self, o: Orientation) -> Self {
        self.config.orientation = o;
        self
    }

    pub fn header(mut self, text: impl Into<String>) -> Self {
        self.config.header = Some(text.into());
        self
    }

    pub fn footer(mut self, text: impl Into<String>) -> Self {
        self.config.footer = Some(text.into());
        self
    }

    pub fn watermark(mut self, text: impl Into<String>) -> Self {
        self.config.watermark = Some(text.into());
        self
    }

    pub fn custom_css(mut self, css: impl Into<String>) -> Self {
        self.config.custom_css = Some(css.into());
        self
    }

    pub fn toc(mut self, v: bool) -> Self {
        self.config.toc = v;
        self
    }

    pub fn compress(mut self, v: bool) -> Self {
        self.config.compress = v;
        self
    }

    pub fn export_html(mut self, v: bool) -> Self {
        self.config.export_html = v;
        self
    }

    pub fn export_docx(mut self, v: bool) -> Self {
        self.config.export_docx = v;
        self
    }

    pub fn renderer(mut self, renderer: Arc<dyn HtmlToPdf>) -> Self {
        self.config.renderer = Some(renderer);
        self
    }

    pub fn compressor(mut self, compressor: Arc<dyn PdfCompressor>) -> Self {
        self.config.compressor = Some(compressor);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<RenderConfig, MdPressError> {
        let c = &self.config;
        if c.font_size < 8 || c.font_size > 20 {
            return Err(MdPressError::InvalidConfig(format!(
                "Font size must be 8–20 pt, got {}",
                c.font_size
            )));
        }
        Ok(self.config)
    }
}

// ── Enums ────────────────────────────────────────────────────────────────

/// Named style theme applied to the rendered document.
///
/// Each theme maps to a fixed CSS fragment in
/// [`crate::pipeline::style::theme_fragment`]; `Default` maps to the empty
/// fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    /// No extra styling beyond the body font rules. (default)
    #[default]
    Default,
    /// GitHub-flavoured light theme with shaded code spans.
    GitHub,
    /// Notion-style off-white theme with underlined headings.
    Notion,
    /// Centred serif theme with generous line height.
    Minimalist,
    /// Dark background, monospace body.
    Dark,
}

impl Theme {
    /// Parse a theme from its display name, as submitted by a form.
    ///
    /// Unrecognised names fall back to `Default`, which composes to an empty
    /// CSS fragment.
    pub fn from_name(name: &str) -> Self {
        match name {
            "GitHub" => Theme::GitHub,
            "Notion" => Theme::Notion,
            "Minimalist" => Theme::Minimalist,
            "Dark" => Theme::Dark,
            _ => Theme::Default,
        }
    }
}

/// Physical page size passed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaperSize {
    /// ISO A4, 210 × 297 mm. (default)
    #[default]
    A4,
    /// US Letter, 8.5 × 11 in.
    Letter,
    /// US Legal, 8.5 × 14 in.
    Legal,
}

impl PaperSize {
    /// Renderer option token for this size.
    pub fn token(&self) -> &'static str {
        match self {
            PaperSize::A4 => "A4",
            PaperSize::Letter => "Letter",
            PaperSize::Legal => "Legal",
        }
    }
}

/// Page orientation passed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    /// Renderer option token for this orientation.
    pub fn token(&self) -> &'static str {
        match self {
            Orientation::Portrait => "Portrait",
            Orientation::Landscape => "Landscape",
        }
    }
}
