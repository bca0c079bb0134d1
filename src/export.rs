//! Document export naming
//!
//! The caller owns the output name; nothing here is cached between
//! render calls.

use chrono::NaiveDateTime;

/// MIME type of the serialized document
pub const PDF_MIME: &str = "application/pdf";

/// Prefix for generated document names
const NAME_PREFIX: &str = "mno";

/// Resolve the document name (without extension).
///
/// An explicit name is trimmed of surrounding whitespace; a missing or
/// emptied name falls back to `mno-YYYYMMDD_HHMMSS` built from `now`.
pub fn resolve_file_name(requested: Option<&str>, now: NaiveDateTime) -> String {
    match requested.map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) => name.to_string(),
        None => format!("{}-{}", NAME_PREFIX, now.format("%Y%m%d_%H%M%S")),
    }
}
