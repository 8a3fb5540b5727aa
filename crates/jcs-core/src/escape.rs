//! # String Escaping — JSON String Literals
//!
//! Emits a string literal with the scheme's fixed escape table: the seven
//! two-character escapes, lowercase `\u00xx` for the remaining C0 controls,
//! a literal solidus, and raw UTF-8 for every other scalar value.

const HEX: &[u8; 16] = b"0123456789abcdef";

/// Append `"`…`"` for `text`, escaping per the canonical table.
///
/// `/` is emitted literally, and no scalar value above U+001F is ever
/// `\u`-escaped; non-ASCII text passes through as its UTF-8 bytes.
pub fn write_string(out: &mut Vec<u8>, text: &str) {
    out.push(b'"');
    for ch in text.chars() {
        match ch {
            '"' => out.extend_from_slice(b"\\\""),
            '\\' => out.extend_from_slice(b"\\\\"),
            '\u{0008}' => out.extend_from_slice(b"\\b"),
            '\t' => out.extend_from_slice(b"\\t"),
            '\n' => out.extend_from_slice(b"\\n"),
            '\u{000C}' => out.extend_from_slice(b"\\f"),
            '\r' => out.extend_from_slice(b"\\r"),
            control if control < '\u{0020}' => {
                let code = control as u32;
                out.extend_from_slice(&[
                    b'\\',
                    b'u',
                    b'0',
                    b'0',
                    HEX[(code >> 4) as usize],
                    HEX[(code & 0xF) as usize],
                ]);
            }
            other => {
                let mut buf = [0u8; 4];
                out.extend_from_slice(other.encode_utf8(&mut buf).as_bytes());
            }
        }
    }
    out.push(b'"');
}
