//! Input classification and authority-marker rewriting.

use std::borrow::Cow;

/// Rewrites a raw input so the grammar parser recognizes its authority.
///
/// Classification scans for the first `/` byte and the byte after it:
///
/// - Starts with a single `/` (length > 2): prefix one more `/`, turning the
///   input into a network-path reference whose first segment is the host.
/// - No slash, slash as the last byte, or first slash not followed by `/`:
///   prefix `//` so everything up to the next slash is the authority.
/// - Already carries a `//` marker at the first slash: pass through unchanged.
pub(crate) fn apply(raw: &str) -> Cow<'_, str> {
    let bytes = raw.as_bytes();
    match bytes.iter().position(|&b| b == b'/') {
        Some(0) if bytes.len() > 2 && bytes[1] != b'/' => Cow::Owned(format!("/{}", raw)),
        Some(i) if i + 1 < bytes.len() && bytes[i + 1] == b'/' => Cow::Borrowed(raw),
        _ => Cow::Owned(format!("//{}", raw)),
    }
}
