//! Special tokens and verbatim layout reconstruction
//!
//!     The upstream lexer attaches comment and whitespace tokens ("special tokens") to the
//!     construct that follows them. When a document is rendered, those fragments are forwarded
//!     verbatim (not re-rendered) with their original line/column layout restored: newlines
//!     are inserted to reach a token's line and spaces to reach its column.
//!
//!     The cursor doing that restoration is an explicit value seeded from the first token's
//!     position and threaded through the run; no global line/column state is involved.

use serde::{Deserialize, Serialize};

/// A comment or whitespace token captured from the original source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialToken {
    pub text: String,
    /// 1-based line of the token's first character
    pub line: u32,
    /// 1-based column of the token's first character
    pub column: u32,
}

impl SpecialToken {
    pub fn new(text: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            text: text.into(),
            line,
            column,
        }
    }
}

/// Tracks the output position while a run of special tokens is replayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutCursor {
    line: u32,
    column: u32,
}

impl LayoutCursor {
    pub fn at(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Emit one token into `out`, padding with newlines and spaces until the
    /// cursor reaches the token's original position, then advance past its text.
    pub fn emit(&mut self, token: &SpecialToken, out: &mut String) {
        while self.line < token.line {
            out.push('\n');
            self.line += 1;
            self.column = 1;
        }
        while self.column < token.column {
            out.push(' ');
            self.column += 1;
        }
        out.push_str(&token.text);
        for ch in token.text.chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }
}

/// Reconstruct the verbatim text of a run of special tokens.
///
/// The cursor starts at the first token's position, so the first token gets no
/// padding; later tokens are padded to restore the gaps between them. Returns
/// an empty string for an empty run.
pub fn reconstruct_special_text(tokens: &[SpecialToken]) -> String {
    let mut out = String::new();
    if let Some(first) = tokens.first() {
        let mut cursor = LayoutCursor::at(first.line, first.column);
        for token in tokens {
            cursor.emit(token, &mut out);
        }
    }
    out
}
