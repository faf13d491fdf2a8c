//! Table-of-contents generation and heading-anchor rewriting.
//!
//! The TOC is built from the *raw Markdown lines*, not from the rendered
//! HTML: any line starting with `#` is a heading candidate, its level is the
//! count of leading `#` characters, and its title is the remainder after one
//! separating space.
//!
//! Anchors are attached to the rendered HTML by literal substring rewriting:
//! the first occurrence of `<h{level}>{title}</h{level}>` gains an
//! `id="{anchor}"` attribute. The match is not DOM-aware. When the Markdown
//! renderer alters the title text — entity escaping, emphasis or links inside
//! the heading — the needle does not occur and the heading silently keeps no
//! anchor. That exact-match-or-skip contract is deliberate; a DOM-based
//! rewrite by heading order would be the robust replacement and is noted in
//! DESIGN.md as an open improvement.
//!
//! Heading levels are not clamped. A run of seven `#` produces a level-7
//! entry whose `<h7>` needle never occurs in rendered HTML, so it lands in
//! the TOC but anchors nothing — the same silent-skip path as a formatted
//! title.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::Write;

/// One heading scanned from the Markdown source, in order of appearance.
///
/// Entries are not deduplicated: two headings with identical normalised
/// titles produce identical (colliding) anchors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingEntry {
    /// Count of leading `#` characters, 1-based, unclamped.
    pub level: usize,
    /// Heading text after the marker, trimmed.
    pub title: String,
    /// URL-safe anchor derived from the title via [`slugify`].
    pub anchor: String,
}

static RE_NON_ALNUM: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Turn a heading title into a URL-safe anchor id.
///
/// Lower-cases the title, then replaces every maximal run of characters
/// outside `[a-z0-9]` with a single hyphen. No uniqueness guarantee and no
/// error path: an empty or all-symbol title yields an empty or all-hyphen
/// anchor, which is accepted.
pub fn slugify(title: &str) -> String {
    RE_NON_ALNUM
        .replace_all(&title.to_lowercase(), "-")
        .into_owned()
}

/// Scan raw Markdown text for heading lines.
pub fn scan_headings(markdown: &str) -> Vec<HeadingEntry> {
    markdown
        .lines()
        .filter(|line| line.starts_with('#'))
        .map(|line| {
            let level = line.chars().take_while(|&c| c == '#').count();
            // Leading bytes are all '#', so slicing at `level` is char-safe.
            let title = line[level..]
                .strip_prefix(' ')
                .unwrap_or(&line[level..])
                .trim()
                .to_string();
            let anchor = slugify(&title);
            HeadingEntry {
                level,
                title,
                anchor,
            }
        })
        .collect()
}

/// Build the TOC block and rewrite matching heading tags in the rendered HTML.
///
/// Returns `(toc_html, rewritten_html, entries)`. The TOC block is an
/// unordered list under a "Table of Contents" heading, with each entry
/// indented `(level - 1) * 20` pixels. For every entry, the first literal
/// occurrence of `<h{level}>{title}</h{level}>` in `html` is rewritten to
/// carry `id="{anchor}"`; entries with no literal match are skipped silently.
pub fn build_toc(markdown: &str, html: &str) -> (String, String, Vec<HeadingEntry>) {
    let entries = scan_headings(markdown);
    let mut toc = String::from("<h2>Table of Contents</h2><ul>");
    let mut rewritten = html.to_string();

    for entry in &entries {
        let indent = (entry.level - 1) * 20;
        // `write!` to a String cannot fail.
        let _ = write!(
            toc,
            "<li style=\"margin-left:{indent}px\"><a href=\"#{anchor}\">{title}</a></li>",
            anchor = entry.anchor,
            title = entry.title,
        );

        let needle = format!(
            "<h{level}>{title}</h{level}>",
            level = entry.level,
            title = entry.title,
        );
        let replacement = format!(
            "<h{level} id=\"{anchor}\">{title}</h{level}>",
            level = entry.level,
            anchor = entry.anchor,
            title = entry.title,
        );
        rewritten = rewritten.replacen(&needle, &replacement, 1);
    }

    toc.push_str("</ul>");
    (toc, rewritten, entries)
}
