//! Byte-order-mark detection, text decoding, and HTML escaping.
//!
//! Only the UTF-16 little-endian BOM is recognised. UTF-16 big-endian and
//! the UTF-8 BOM fall through to plain UTF-8 decoding.

/// The UTF-16 little-endian byte-order mark.
pub const UTF16LE_BOM: [u8; 2] = [0xFF, 0xFE];

/// Text encodings the resolver distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    /// UTF-8, the fallback for every buffer without a UTF-16LE BOM.
    Utf8,
    /// UTF-16 little-endian, selected by a leading `FF FE`.
    Utf16Le,
}

/// Pick the encoding from the first two bytes.
pub fn detect_encoding(bytes: &[u8]) -> TextEncoding {
    if bytes.starts_with(&UTF16LE_BOM) {
        TextEncoding::Utf16Le
    } else {
        TextEncoding::Utf8
    }
}

/// Decode a whole buffer to text.
///
/// Decoding is lossy in both encodings: invalid sequences become U+FFFD.
/// A UTF-16LE BOM is decoded along with the text as U+FEFF, and a trailing
/// odd byte is dropped.
pub fn decode_text(bytes: &[u8]) -> String {
    match detect_encoding(bytes) {
        TextEncoding::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
        TextEncoding::Utf16Le => decode_utf16le(bytes),
    }
}

fn decode_utf16le(bytes: &[u8]) -> String {
    let units = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]));
    char::decode_utf16(units)
        .map(|unit| unit.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}

/// Escape `& < > " '` for embedding in HTML.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
