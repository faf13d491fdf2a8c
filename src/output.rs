//! Conversion output types.
//!
//! Artifacts are plain byte buffers paired with a suggested download name.
//! They are produced once, handed to the caller, and carry no identity
//! beyond that — there is no caching layer and nothing persists between
//! conversions.

/// One produced artifact: opaque bytes plus a suggested file name.
#[derive(Debug, Clone)]
pub struct RenderedArtifact {
    /// The artifact bytes (PDF, HTML, or DOCX).
    pub bytes: Vec<u8>,
    /// Suggested file name including extension, e.g. `My_Report.pdf`.
    pub filename: String,
}

impl RenderedArtifact {
    pub(crate) fn new(bytes: Vec<u8>, base: &str, extension: &str) -> Self {
        Self {
            bytes,
            filename: format!("{base}.{extension}"),
        }
    }
}

/// Everything a successful conversion produced.
///
/// The PDF is always present; HTML and DOCX are present only when requested
/// via [`crate::RenderConfig`].
#[derive(Debug, Clone)]
pub struct ConversionOutput {
    /// The rendered (and possibly compressed) PDF.
    pub pdf: RenderedArtifact,
    /// The wrapped HTML fed to the renderer, when `export_html` was set.
    pub html: Option<RenderedArtifact>,
    /// A minimal single-paragraph DOCX of the raw Markdown, when
    /// `export_docx` was set.
    pub docx: Option<RenderedArtifact>,
    /// The resolved output base name shared by all artifacts.
    pub base_name: String,
}

impl ConversionOutput {
    /// Iterate over every produced artifact, PDF first.
    pub fn artifacts(&self) -> impl Iterator<Item = &RenderedArtifact> {
        std::iter::once(&self.pdf)
            .chain(self.html.iter())
            .chain(self.docx.iter())
    }
}
