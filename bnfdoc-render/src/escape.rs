//! Escaping utility
//!
//!     Converts raw text into a safely quotable form. The common control characters and the
//!     two quoting metacharacters get their two-character escapes; any other character outside
//!     printable ASCII becomes a numeric `\uXXXX` escape. Printable ASCII passes through
//!     unchanged. Applied independently at each string-literal or character boundary; a
//!     render never re-escapes text it already escaped.

/// Escape `text` for inclusion inside a double-quoted literal.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\u{8}' => out.push_str("\\b"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\u{c}' => out.push_str("\\f"),
            '\r' => out.push_str("\\r"),
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            ' '..='~' => out.push(ch),
            _ => {
                let code = ch as u32;
                if code < 0x10000 {
                    out.push_str(&format!("\\u{:04x}", code));
                } else {
                    // Above the BMP: escape both surrogate halves
                    let mut buf = [0u16; 2];
                    for unit in ch.encode_utf16(&mut buf) {
                        out.push_str(&format!("\\u{:04x}", unit));
                    }
                }
            }
        }
    }
    out
}
