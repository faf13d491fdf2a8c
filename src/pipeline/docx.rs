//! Minimal DOCX export.
//!
//! A DOCX file is a zip archive of OOXML parts. This writer emits the
//! smallest package Word accepts — content types, the package relationship,
//! and a `word/document.xml` holding the raw Markdown text as one paragraph.
//! No Markdown structure is carried over; the artifact is a plain-text
//! companion, not a rendered document.

use crate::error::MdPressError;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/></Types>"#;

const PACKAGE_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

/// Serialise `text` into a single-paragraph DOCX package.
pub fn write_docx(text: &str) -> Result<Vec<u8>, MdPressError> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let deflated = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    add_part(&mut zip, "[Content_Types].xml", CONTENT_TYPES, deflated)?;
    add_part(&mut zip, "_rels/.rels", PACKAGE_RELS, deflated)?;
    add_part(&mut zip, "word/document.xml", &document_xml(text), deflated)?;

    let cursor = zip
        .finish()
        .map_err(|e| MdPressError::DocxWriteFailed { detail: e.to_string() })?;
    Ok(cursor.into_inner())
}

fn add_part(
    zip: &mut ZipWriter<Cursor<Vec<u8>>>,
    name: &str,
    content: &str,
    options: SimpleFileOptions,
) -> Result<(), MdPressError> {
    zip.start_file(name, options)
        .map_err(|e| MdPressError::DocxWriteFailed { detail: e.to_string() })?;
    zip.write_all(content.as_bytes())
        .map_err(|e| MdPressError::DocxWriteFailed { detail: e.to_string() })?;
    Ok(())
}

fn document_xml(text: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body><w:p><w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p></w:body></w:document>"#,
        xml_escape(text)
    )
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
