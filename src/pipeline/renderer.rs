//! HTML-to-PDF rendering behind an injectable trait.
//!
//! The core pipeline never talks to wkhtmltopdf directly; it hands the
//! wrapped HTML and a [`RenderOptions`] bundle to whatever [`HtmlToPdf`]
//! implementation the config carries. The default implementation shells out
//! to the `wkhtmltopdf` binary through a request-scoped [`TempDir`], so the
//! on-disk buffers are deleted on every exit path — success, renderer
//! failure, or panic — when the `TempDir` drops.
//!
//! There is no timeout on the subprocess: a hung renderer blocks the
//! conversion. Embedders who need a bound should wrap their injected
//! renderer accordingly.

use crate::config::{Orientation, PaperSize, RenderConfig};
use crate::error::MdPressError;
use std::process::Command;
use tempfile::TempDir;
use tracing::{debug, info};

/// Footer template understood by wkhtmltopdf: current page / total pages.
pub const PAGE_NUMBER_TEMPLATE: &str = "[page]/[topage]";

/// Options bundle passed to the renderer alongside the HTML string.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Allow the renderer to read local files referenced by the HTML.
    pub local_file_access: bool,
    /// Page size token.
    pub page_size: PaperSize,
    /// Orientation token.
    pub orientation: Orientation,
    /// Footer page-number template, e.g. [`PAGE_NUMBER_TEMPLATE`], when page
    /// numbers are enabled.
    pub footer_page_template: Option<String>,
    /// Centred header text.
    pub header_center: Option<String>,
    /// Centred footer text.
    pub footer_center: Option<String>,
}

impl RenderOptions {
    /// Derive renderer options from a conversion config.
    pub fn from_config(config: &RenderConfig) -> Self {
        Self {
            local_file_access: true,
            page_size: config.paper_size,
            orientation: config.orientation,
            footer_page_template: config
                .page_numbers
                .then(|| PAGE_NUMBER_TEMPLATE.to_string()),
            header_center: config.header.clone(),
            footer_center: config.footer.clone(),
        }
    }
}

/// An external HTML-to-PDF renderer.
///
/// Implementations take the complete HTML document string and return raw PDF
/// bytes, or fail with a render error. Tests inject deterministic fakes.
pub trait HtmlToPdf: Send + Sync {
    fn render(&self, html: &str, options: &RenderOptions) -> Result<Vec<u8>, MdPressError>;
}

/// Default renderer: the `wkhtmltopdf` command-line binary.
pub struct WkhtmltopdfRenderer {
    binary: String,
}

impl WkhtmltopdfRenderer {
    pub fn new() -> Self {
        Self {
            binary: "wkhtmltopdf".to_string(),
        }
    }

    /// Use a specific binary path instead of resolving `wkhtmltopdf` on PATH.
    pub fn with_binary(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl Default for WkhtmltopdfRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlToPdf for WkhtmltopdfRenderer {
    fn render(&self, html: &str, options: &RenderOptions) -> Result<Vec<u8>, MdPressError> {
        // Both buffers live in one TempDir; dropping it at any return point
        // below removes them.
        let dir = TempDir::new().map_err(|e| MdPressError::Internal(format!("tempdir: {e}")))?;
        let html_path = dir.path().join("input.html");
        let pdf_path = dir.path().join("output.pdf");

        std::fs::write(&html_path, html)
            .map_err(|e| MdPressError::Internal(format!("temp html write: {e}")))?;

        let mut cmd = Command::new(&self.binary);
        cmd.arg("--quiet");
        if options.local_file_access {
            cmd.arg("--enable-local-file-access");
        }
        cmd.args(["--page-size", options.page_size.token()]);
        cmd.args(["--orientation", options.orientation.token()]);
        if let Some(template) = &options.footer_page_template {
            cmd.args(["--footer-right", template]);
        }
        if let Some(header) = &options.header_center {
            cmd.args(["--header-center", header]);
        }
        if let Some(footer) = &options.footer_center {
            cmd.args(["--footer-center", footer]);
        }
        cmd.arg(&html_path).arg(&pdf_path);

        debug!("Invoking {} ({} bytes of HTML)", self.binary, html.len());
        let output = cmd.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MdPressError::RendererNotFound {
                    binary: self.binary.clone(),
                }
            } else {
                MdPressError::RenderFailed {
                    detail: e.to_string(),
                }
            }
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(MdPressError::RenderFailed {
                detail: format!("{} exited with {}: {}", self.binary, output.status, stderr.trim()),
            });
        }

        let pdf = std::fs::read(&pdf_path).map_err(|e| MdPressError::RenderFailed {
            detail: format!("renderer produced no output file: {e}"),
        })?;
        info!("Rendered {} bytes of PDF", pdf.len());
        Ok(pdf)
    }
}
