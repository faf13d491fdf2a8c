//! Style composition and document wrapping.
//!
//! [`compose_style`] assembles the `<style>` block fed to the renderer from
//! four sources, in order: the body font rules from the config, the named
//! theme's CSS fragment, the caller's free-form custom CSS (spliced verbatim
//! — an accepted trust boundary, see [`crate::RenderConfig::custom_css`]),
//! and the page-break rule for H1 headings.
//!
//! [`wrap_document`] then produces the final HTML handed to the renderer,
//! with the optional watermark overlay as the first child of `<body>`.

use crate::config::{RenderConfig, Theme};

/// Fixed CSS fragment for a named theme. `Default` is empty.
pub fn theme_fragment(theme: Theme) -> &'static str {
    match theme {
        Theme::Default => "",
        Theme::GitHub => {
            "body { font-family: 'Segoe UI'; background: #fff; color: #24292e; } code { background: #f6f8fa; }"
        }
        Theme::Notion => {
            "body { font-family: 'sans-serif'; background: #fdfdfd; color: #37352f; } h1, h2, h3 { border-bottom: 1px solid #eee; }"
        }
        Theme::Minimalist => {
            "body { font-family: 'Georgia'; background: #fff; color: #000; line-height: 1.6; } h1, h2 { text-align: center; }"
        }
        Theme::Dark => {
            "body { background: #121212; color: #e0e0e0; font-family: 'Courier New'; }"
        }
    }
}

/// Assemble the `<style>` block for a conversion.
///
/// Theme fragment and custom CSS are spliced at style-block level, after the
/// body font rule, so a theme's own `body { }` rule overrides the font
/// defaults and custom CSS overrides both.
pub fn compose_style(config: &RenderConfig) -> String {
    let page_break = if config.split_pages { "always" } else { "auto" };
    format!(
        "<style>\n\
         body {{\n    font-family: '{family}';\n    font-size: {size}pt;\n}}\n\
         {theme}\n\
         {custom}\n\
         h1 {{ page-break-before: {page_break}; }}\n\
         </style>",
        family = config.font_family,
        size = config.font_size,
        theme = theme_fragment(config.theme),
        custom = config.custom_css.as_deref().unwrap_or(""),
    )
}

/// The rotated low-opacity overlay for a non-empty watermark text.
pub fn watermark_overlay(text: &str) -> String {
    format!(
        "<div style=\"position:fixed; top:45%; left:30%; font-size:48px; \
         color:rgba(150,150,150,0.15); transform:rotate(-30deg); z-index:-1\">{text}</div>"
    )
}

/// Wrap the rendered body in a full HTML document.
///
/// An absent or empty watermark produces no overlay `div` at all.
pub fn wrap_document(style: &str, watermark: Option<&str>, body: &str) -> String {
    let overlay = match watermark {
        Some(text) if !text.is_empty() => watermark_overlay(text),
        _ => String::new(),
    };
    format!("<html><head>{style}</head><body>{overlay}{body}</body></html>")
}
