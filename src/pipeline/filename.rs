//! Output base-name resolution.
//!
//! Priority order:
//! 1. A true top-level H1 as literally the first line of the document
//!    (`# Title`), spaces replaced by underscores.
//! 2. The uploaded file's name with its extension stripped.
//! 3. `converted_<timestamp>` from the current wall clock.
//!
//! No collision detection and no sanitisation beyond the space-to-underscore
//! substitution in case 1 — the names are download suggestions, not paths
//! the library writes to on its own.

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

// Anchored at the start of the whole text; `.` stops at the first newline,
// so only a leading `# Title` line matches.
static RE_LEADING_H1: Lazy<Regex> = Lazy::new(|| Regex::new(r"^# (.+)").unwrap());

static TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year][month][day]_[hour][minute][second]");

/// Derive the output base name for a document.
pub fn resolve_base_name(text: &str, source_name: Option<&str>) -> String {
    if let Some(caps) = RE_LEADING_H1.captures(text) {
        return caps[1].trim().replace(' ', "_");
    }

    if let Some(name) = source_name {
        if let Some(stem) = Path::new(name).file_stem() {
            return stem.to_string_lossy().into_owned();
        }
    }

    format!("converted_{}", timestamp())
}

/// Current wall-clock time as `YYYYMMDD_HHMMSS`, local when the offset is
/// determinable, UTC otherwise.
fn timestamp() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    now.format(&TIMESTAMP_FORMAT)
        .unwrap_or_else(|_| "00000000_000000".to_string())
}
