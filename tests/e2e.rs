//! End-to-end integration tests for mdpress.
//!
//! The external collaborators (HTML-to-PDF renderer, PDF compressor) are
//! replaced with deterministic fakes so the whole pipeline runs without
//! wkhtmltopdf or qpdf installed. The subprocess contract itself is covered
//! at the bottom with a shell-script stand-in binary (unix only).

use mdpress::{
    convert, convert_to_dir, Document, HtmlToPdf, MdPressError, PdfCompressor, RenderConfig,
    RenderOptions, Theme, WkhtmltopdfRenderer,
};
use std::sync::{Arc, Mutex};

/// Opt-in log output: `RUST_LOG=mdpress=debug cargo test --test e2e`.
fn init_logging() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

// ── Fakes ────────────────────────────────────────────────────────────────────

const FAKE_PDF: &[u8] = b"%PDF-1.4 fake-render-output";

/// Renderer that records the HTML and options it was handed and returns
/// deterministic PDF bytes.
#[derive(Default)]
struct FakeRenderer {
    seen_html: Mutex<Option<String>>,
    seen_options: Mutex<Option<RenderOptions>>,
}

impl HtmlToPdf for FakeRenderer {
    fn render(&self, html: &str, options: &RenderOptions) -> Result<Vec<u8>, MdPressError> {
        *self.seen_html.lock().unwrap() = Some(html.to_string());
        *self.seen_options.lock().unwrap() = Some(options.clone());
        Ok(FAKE_PDF.to_vec())
    }
}

struct FailingRenderer;

impl HtmlToPdf for FailingRenderer {
    fn render(&self, _: &str, _: &RenderOptions) -> Result<Vec<u8>, MdPressError> {
        Err(MdPressError::RenderFailed {
            detail: "simulated renderer crash".into(),
        })
    }
}

/// Compressor that prepends a marker so tests can tell its output apart.
struct FakeCompressor;

impl PdfCompressor for FakeCompressor {
    fn compress(&self, pdf: &[u8]) -> Result<Vec<u8>, MdPressError> {
        let mut out = b"%PDF-compressed ".to_vec();
        out.extend_from_slice(&pdf[..8.min(pdf.len())]);
        Ok(out)
    }
}

struct FailingCompressor;

impl PdfCompressor for FailingCompressor {
    fn compress(&self, _: &[u8]) -> Result<Vec<u8>, MdPressError> {
        Err(MdPressError::CompressionFailed {
            detail: "simulated malformed PDF".into(),
        })
    }
}

fn config_with(renderer: Arc<FakeRenderer>) -> RenderConfig {
    RenderConfig::builder().renderer(renderer).build().unwrap()
}

// ── Full pipeline ────────────────────────────────────────────────────────────

#[test]
fn toc_document_end_to_end() {
    init_logging();
    let renderer = Arc::new(FakeRenderer::default());
    let config = RenderConfig::builder()
        .renderer(renderer.clone())
        .toc(true)
        .build()
        .unwrap();

    let doc = Document::from_text("# Title\n## Sub\ntext");
    let output = convert(&doc, &config).expect("conversion should succeed");

    assert_eq!(output.pdf.bytes, FAKE_PDF);
    assert_eq!(output.pdf.filename, "Title.pdf");

    let html = renderer.seen_html.lock().unwrap().clone().unwrap();
    // Two TOC entries, the second indented one level deeper.
    assert!(html.contains("<h2>Table of Contents</h2><ul>"));
    assert_eq!(html.matches("<li").count(), 2);
    assert!(html.contains("margin-left:0px"));
    assert!(html.contains("margin-left:20px"));
    // Literal heading match succeeded: anchors attached to both headings.
    assert!(html.contains("<h1 id=\"title\">Title</h1>"));
    assert!(html.contains("<h2 id=\"sub\">Sub</h2>"));
    // TOC precedes the body headings.
    assert!(html.find("Table of Contents").unwrap() < html.find("<h1 id=").unwrap());
}

#[test]
fn toc_disabled_leaves_headings_bare() {
    let renderer = Arc::new(FakeRenderer::default());
    let doc = Document::from_text("# Title\ntext");
    convert(&doc, &config_with(renderer.clone())).unwrap();

    let html = renderer.seen_html.lock().unwrap().clone().unwrap();
    assert!(!html.contains("Table of Contents"));
    assert!(html.contains("<h1>Title</h1>"));
}

#[test]
fn style_and_watermark_reach_the_renderer() {
    let renderer = Arc::new(FakeRenderer::default());
    let config = RenderConfig::builder()
        .renderer(renderer.clone())
        .theme(Theme::Dark)
        .font_size(14)
        .split_pages(true)
        .watermark("DRAFT")
        .custom_css(".note { border: 1px solid; }")
        .build()
        .unwrap();

    convert(&Document::from_text("body text"), &config).unwrap();

    let html = renderer.seen_html.lock().unwrap().clone().unwrap();
    assert!(html.contains("background: #121212"));
    assert!(html.contains("font-size: 14pt;"));
    assert!(html.contains("page-break-before: always"));
    assert!(html.contains(".note { border: 1px solid; }"));
    assert!(html.contains(">DRAFT</div>"));
}

#[test]
fn renderer_options_follow_config() {
    let renderer = Arc::new(FakeRenderer::default());
    let config = RenderConfig::builder()
        .renderer(renderer.clone())
        .page_numbers(true)
        .header("ACME Corp")
        .footer("internal")
        .build()
        .unwrap();

    convert(&Document::from_text("x"), &config).unwrap();

    let opts = renderer.seen_options.lock().unwrap().clone().unwrap();
    assert!(opts.local_file_access);
    assert_eq!(opts.footer_page_template.as_deref(), Some("[page]/[topage]"));
    assert_eq!(opts.header_center.as_deref(), Some("ACME Corp"));
    assert_eq!(opts.footer_center.as_deref(), Some("internal"));
}

// ── Artifacts ────────────────────────────────────────────────────────────────

#[test]
fn html_artifact_is_the_rendered_input_verbatim() {
    let renderer = Arc::new(FakeRenderer::default());
    let config = RenderConfig::builder()
        .renderer(renderer.clone())
        .export_html(true)
        .build()
        .unwrap();

    let output = convert(&Document::from_text("# Doc\nhello"), &config).unwrap();

    let seen = renderer.seen_html.lock().unwrap().clone().unwrap();
    let html = output.html.expect("HTML artifact requested");
    assert_eq!(html.bytes, seen.into_bytes());
    assert_eq!(html.filename, "Doc.html");
}

#[test]
fn docx_artifact_holds_the_raw_markdown() {
    let config = RenderConfig::builder()
        .renderer(Arc::new(FakeRenderer::default()))
        .export_docx(true)
        .build()
        .unwrap();

    let output = convert(&Document::from_text("# Doc\nplain *markdown*"), &config).unwrap();
    let docx = output.docx.expect("DOCX artifact requested");
    assert_eq!(docx.filename, "Doc.docx");
    assert_eq!(&docx.bytes[..4], b"PK\x03\x04");
}

#[test]
fn optional_artifacts_absent_by_default() {
    let output = convert(
        &Document::from_text("x"),
        &config_with(Arc::new(FakeRenderer::default())),
    )
    .unwrap();
    assert!(output.html.is_none());
    assert!(output.docx.is_none());
}

// ── Filenames ────────────────────────────────────────────────────────────────

#[test]
fn filename_prefers_upload_name_without_leading_h1() {
    let mut doc = Document::from_text("no heading first\n# Later");
    doc.source_name = Some("notes.md".into());
    let output = convert(&doc, &config_with(Arc::new(FakeRenderer::default()))).unwrap();
    assert_eq!(output.pdf.filename, "notes.pdf");
}

#[test]
fn filename_falls_back_to_timestamp() {
    let output = convert(
        &Document::from_text("just text"),
        &config_with(Arc::new(FakeRenderer::default())),
    )
    .unwrap();
    let re = regex::Regex::new(r"^converted_\d{8}_\d{6}\.pdf$").unwrap();
    assert!(re.is_match(&output.pdf.filename), "got: {}", output.pdf.filename);
}

// ── Compression ──────────────────────────────────────────────────────────────

#[test]
fn compression_replaces_pdf_bytes() {
    let config = RenderConfig::builder()
        .renderer(Arc::new(FakeRenderer::default()))
        .compressor(Arc::new(FakeCompressor))
        .compress(true)
        .build()
        .unwrap();

    let output = convert(&Document::from_text("x"), &config).unwrap();
    assert!(output.pdf.bytes.starts_with(b"%PDF-compressed"));
}

#[test]
fn failed_compression_falls_back_to_uncompressed() {
    init_logging();
    let config = RenderConfig::builder()
        .renderer(Arc::new(FakeRenderer::default()))
        .compressor(Arc::new(FailingCompressor))
        .compress(true)
        .build()
        .unwrap();

    let output = convert(&Document::from_text("x"), &config).unwrap();
    assert_eq!(output.pdf.bytes, FAKE_PDF, "uncompressed bytes kept");
}

// ── Failure policy ───────────────────────────────────────────────────────────

#[test]
fn renderer_failure_yields_single_error_and_no_artifacts() {
    let config = RenderConfig::builder()
        .renderer(Arc::new(FailingRenderer))
        .export_html(true)
        .export_docx(true)
        .build()
        .unwrap();

    let err = convert(&Document::from_text("# Doc"), &config).unwrap_err();
    assert!(matches!(err, MdPressError::RenderFailed { .. }));
    assert!(err.to_string().contains("simulated renderer crash"));
}

#[test]
fn empty_document_is_an_input_error() {
    let err = convert(
        &Document::from_text(""),
        &config_with(Arc::new(FakeRenderer::default())),
    )
    .unwrap_err();
    assert!(matches!(err, MdPressError::EmptyDocument));
}

// ── convert_to_dir ───────────────────────────────────────────────────────────

#[test]
fn convert_to_dir_writes_every_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let config = RenderConfig::builder()
        .renderer(Arc::new(FakeRenderer::default()))
        .export_html(true)
        .export_docx(true)
        .build()
        .unwrap();

    let written = convert_to_dir(&Document::from_text("# Out\nbody"), dir.path(), &config).unwrap();

    assert_eq!(written.len(), 3);
    assert_eq!(written[0].file_name().unwrap(), "Out.pdf");
    for path in &written {
        assert!(path.exists(), "missing artifact: {}", path.display());
    }
    assert_eq!(std::fs::read(&written[0]).unwrap(), FAKE_PDF);
    // No leftover temp files from the atomic writes.
    let stray: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().map(|x| x == "tmp").unwrap_or(false))
        .collect();
    assert!(stray.is_empty());
}

// ── Subprocess renderer contract (unix only) ─────────────────────────────────

/// Stand-in for the wkhtmltopdf binary: records its argument list, writes
/// fake PDF bytes to the last argument, and lets the test observe whether
/// the temp HTML buffer was cleaned up afterwards.
#[cfg(unix)]
#[test]
fn subprocess_renderer_passes_options_and_cleans_temp_buffers() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let record = dir.path().join("args.txt");
    let script = dir.path().join("fake-wkhtmltopdf");
    std::fs::write(
        &script,
        format!(
            "#!/bin/sh\necho \"$@\" > '{}'\neval \"out=\\${{$#}}\"\nprintf '%%PDF-1.4 fake' > \"$out\"\n",
            record.display()
        ),
    )
    .unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

    let renderer = WkhtmltopdfRenderer::with_binary(script.to_string_lossy());
    let config = RenderConfig::builder().page_numbers(true).build().unwrap();
    let pdf = renderer
        .render("<html><body>hi</body></html>", &RenderOptions::from_config(&config))
        .expect("fake binary should succeed");
    assert_eq!(pdf, b"%PDF-1.4 fake");

    let args = std::fs::read_to_string(&record).unwrap();
    assert!(args.contains("--quiet"));
    assert!(args.contains("--enable-local-file-access"));
    assert!(args.contains("--page-size A4"));
    assert!(args.contains("--orientation Portrait"));
    assert!(args.contains("--footer-right [page]/[topage]"));

    // The HTML temp buffer named in the argument list must be gone.
    let html_arg = args
        .split_whitespace()
        .find(|a| a.ends_with("input.html"))
        .expect("renderer should pass an input.html path");
    assert!(
        !std::path::Path::new(html_arg).exists(),
        "temp buffer leaked: {html_arg}"
    );
}
