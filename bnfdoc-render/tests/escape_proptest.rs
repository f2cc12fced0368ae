//! Property-based tests for the escaping utility
//!
//! These pin down the contract: printable ASCII outside the two quoting
//! metacharacters passes through unchanged, the named control characters get
//! two-character escapes, and the output never contains a raw non-printable
//! character no matter the input.

use bnfdoc_render::escape;
use proptest::prelude::*;

proptest! {
    #[test]
    fn printable_ascii_without_metacharacters_is_identity(
        s in "[ !#-\\[\\]-~]*"
    ) {
        // Everything from space to tilde except '"' (0x22) and '\\' (0x5c)
        prop_assert_eq!(escape(&s), s);
    }

    #[test]
    fn output_is_always_printable_ascii(s in any::<String>()) {
        let escaped = escape(&s);
        prop_assert!(escaped.chars().all(|c| (' '..='~').contains(&c)));
    }

    #[test]
    fn escaping_never_shrinks_text(s in any::<String>()) {
        prop_assert!(escape(&s).chars().count() >= s.chars().count());
    }
}

#[test]
fn named_control_characters_get_two_character_escapes() {
    let cases = [
        ('\u{8}', "\\b"),
        ('\t', "\\t"),
        ('\n', "\\n"),
        ('\r', "\\r"),
        ('\u{c}', "\\f"),
        ('\\', "\\\\"),
        ('"', "\\\""),
    ];
    for (ch, expected) in cases {
        assert_eq!(escape(&ch.to_string()), expected, "escape of {:?}", ch);
    }
}
