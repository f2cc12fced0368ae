//! Regular-expression renderer
//!
//!     Maps a regex node to its textual notation. The bracket decision applies once, around
//!     the whole rendered body: `<...>` is emitted when the node is a reference, end-of-input,
//!     carries a label, or is the top-level pattern of a token-production entry and not a
//!     plain string literal. Inside the brackets (references excepted) come the `#` private
//!     marker and the `label: ` prefix.
//!
//!     Dispatch is an exhaustive match over the closed variant set, so an unhandled node kind
//!     is a compile error rather than a runtime fallback.

use bnfdoc_grammar::{CharClassPart, Regex, RegexKind};

use crate::escape::escape;

/// Render one regular-expression node to grammar notation.
pub fn render_regex(re: &Regex) -> String {
    let has_label = re.is_labeled();
    let just_name = matches!(re.kind, RegexKind::Reference(_));
    let eof = matches!(re.kind, RegexKind::EndOfInput);
    let is_literal = matches!(re.kind, RegexKind::Literal(_));
    let needs_brackets = just_name || eof || has_label || (!is_literal && re.token_context);

    let mut out = String::new();
    if needs_brackets {
        out.push('<');
        if !just_name {
            if re.private_def {
                out.push('#');
            }
            if has_label {
                out.push_str(&re.label);
                out.push_str(": ");
            }
        }
    }

    match &re.kind {
        RegexKind::Literal(text) => {
            out.push('"');
            out.push_str(&escape(text));
            out.push('"');
        }
        RegexKind::CharClass { negated, parts } => {
            if *negated {
                out.push('~');
            }
            out.push('[');
            for (i, part) in parts.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                match part {
                    CharClassPart::Single(ch) => {
                        out.push('"');
                        out.push_str(&escape(&ch.to_string()));
                        out.push('"');
                    }
                    CharClassPart::Range(lo, hi) => {
                        out.push('"');
                        out.push_str(&escape(&lo.to_string()));
                        out.push_str("\"-\"");
                        out.push_str(&escape(&hi.to_string()));
                        out.push('"');
                    }
                }
            }
            out.push(']');
        }
        RegexKind::Alternation(subs) => {
            for (i, sub) in subs.iter().enumerate() {
                if i > 0 {
                    out.push_str(" | ");
                }
                out.push_str(&render_regex(sub));
            }
        }
        RegexKind::Sequence(subs) => {
            for (i, sub) in subs.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                let needs_parens = matches!(sub.kind, RegexKind::Alternation(_));
                if needs_parens {
                    out.push('(');
                }
                out.push_str(&render_regex(sub));
                if needs_parens {
                    out.push(')');
                }
            }
        }
        RegexKind::OneOrMore(inner) => {
            out.push('(');
            out.push_str(&render_regex(inner));
            out.push_str(")+");
        }
        RegexKind::ZeroOrMore(inner) => {
            out.push('(');
            out.push_str(&render_regex(inner));
            out.push_str(")*");
        }
        RegexKind::ZeroOrOne(inner) => {
            out.push('(');
            out.push_str(&render_regex(inner));
            out.push_str(")?");
        }
        RegexKind::Repeat { inner, min, max } => {
            out.push('(');
            out.push_str(&render_regex(inner));
            out.push(')');
            match max {
                Some(max) => out.push_str(&format!("{{{},{}}}", min, max)),
                None => out.push_str(&format!("{{{}}}", min)),
            }
        }
        RegexKind::Reference(name) => {
            out.push_str(name);
        }
        RegexKind::EndOfInput => {
            out.push_str("EOF");
        }
    }

    if needs_brackets {
        out.push('>');
    }
    out
}
