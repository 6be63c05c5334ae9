//! MIME type detection module
//!
//! Returns the corresponding Content-Type based on file extension.

use crate::logger;

/// Extract the extension token: the substring after the last `.`.
///
/// A filename with no `.` yields the whole filename as the token, which
/// will not match the lookup table and falls through to the fallback.
pub fn extension_token(filename: &str) -> &str {
    filename.rsplit('.').next().unwrap_or(filename)
}

/// Look up the Content-Type for an extension token.
///
/// Returns `None` for tokens outside the table so the caller can make the
/// fallback observable.
pub fn lookup(extension: &str) -> Option<&'static str> {
    match extension {
        "js" => Some("text/javascript"),
        "html" => Some("text/html"),
        "wasm" => Some("application/wasm"),
        _ => None,
    }
}

/// Get MIME Content-Type for a resolved filename.
///
/// Unrecognized extensions fall back to `text/plain` with a warning log,
/// since they signal an unclassified file rather than a deliberate
/// plain-text classification.
pub fn content_type_for(filename: &str) -> &'static str {
    let extension = extension_token(filename);
    match lookup(extension) {
        Some(content_type) => content_type,
        None => {
            logger::log_unknown_extension(extension);
            "text/plain"
        }
    }
}
