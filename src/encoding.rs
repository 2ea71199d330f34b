//! Character encoding detection and transcoding.
//!
//! Pages fetched over HTTP arrive as bytes. The charset is read from the
//! document's own meta declarations and the bytes are decoded to UTF-8
//! before parsing.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// How far into the document to look for a charset declaration.
const SNIFF_LEN: usize = 1024;

/// Match `<meta charset="...">`
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s/>;]+)"#).expect("valid regex")
});

/// Detect character encoding from HTML bytes.
///
/// Handles both `<meta charset="...">` and the `http-equiv` form, whose
/// `content="text/html; charset=..."` attribute matches the same pattern.
/// Unknown labels and missing declarations fall back to UTF-8. Labels that
/// browsers never honour in a meta tag (`utf-16`, `utf-16be`,
/// `x-user-defined`) resolve to their output encoding, which is UTF-8 or
/// windows-1252.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);

    CHARSET_META_RE
        .captures(&head)
        .and_then(|c| c.get(1))
        .and_then(|label| Encoding::for_label(label.as_str().as_bytes()))
        .map(Encoding::output_encoding)
        .unwrap_or(UTF_8)
}

/// Transcode HTML bytes to a UTF-8 string.
///
/// Invalid sequences become U+FFFD rather than errors.
///
/// # Examples
///
/// ```
/// use ai_readability::encoding::transcode_to_utf8;
///
/// let html = b"<meta charset=\"iso-8859-1\"><p>Caf\xE9</p>";
/// assert!(transcode_to_utf8(html).contains("Café"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    let (text, _, _) = encoding.decode(html);
    text.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::WINDOWS_1252;

    #[test]
    fn detects_meta_charset() {
        assert_eq!(detect_encoding(b"<meta charset=\"windows-1252\">"), WINDOWS_1252);
        assert_eq!(detect_encoding(b"<META CHARSET=utf-8>"), UTF_8);
    }

    #[test]
    fn detects_http_equiv_charset() {
        let html = b"<meta http-equiv=\"Content-Type\" content=\"text/html; charset=ISO-8859-1\">";
        // encoding_rs maps the ISO-8859-1 label to windows-1252, as browsers do.
        assert_eq!(detect_encoding(html), WINDOWS_1252);
    }

    #[test]
    fn unknown_or_missing_charset_defaults_to_utf8() {
        assert_eq!(detect_encoding(b"<meta charset=\"klingon\">"), UTF_8);
        assert_eq!(detect_encoding(b"<p>plain</p>"), UTF_8);
        assert_eq!(detect_encoding(b""), UTF_8);
    }

    #[test]
    fn utf16_labels_resolve_to_utf8() {
        assert_eq!(detect_encoding(b"<meta charset=\"utf-16\">"), UTF_8);
        assert_eq!(detect_encoding(b"<meta charset=\"UTF-16BE\">"), UTF_8);
        assert_eq!(detect_encoding(b"<meta charset=\"utf-16le\">"), UTF_8);
    }

    #[test]
    fn transcodes_windows_1252() {
        let html = b"<meta charset=\"windows-1252\"><p>\x93quoted\x94 caf\xE9</p>";
        let text = transcode_to_utf8(html);
        assert!(text.contains("\u{201C}quoted\u{201D} café"));
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let text = transcode_to_utf8(b"<p>bad \xFF byte</p>");
        assert!(text.contains('\u{FFFD}'));
    }
}
