//! Token-production block renderer
//!
//!     Renders one lexical token-production block: a lex-state selector header, the kind
//!     keyword, an optional `[IGNORE_CASE]` marker, then one line per pattern with `| `
//!     continuation between entries. Blocks the grammar author did not write explicitly
//!     render to nothing, whatever their contents.

use bnfdoc_grammar::TokenBlock;

use crate::regex::render_regex;

/// Render a token-production block to grammar notation.
pub fn token_block_text(block: &TokenBlock) -> String {
    if !block.explicit {
        return String::new();
    }

    let mut out = String::new();
    // An absent and an empty state set both mean "all states"
    match block.lex_states.as_deref() {
        None | Some([]) => out.push_str("<*> "),
        Some(states) => {
            out.push('<');
            for (i, state) in states.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(state);
            }
            out.push_str("> ");
        }
    }
    out.push_str(block.kind.keyword());
    if block.ignore_case {
        out.push_str(" [IGNORE_CASE]");
    }
    out.push_str(" : {\n");

    for (i, spec) in block.specs.iter().enumerate() {
        out.push_str(&render_regex(&spec.regex));
        if let Some(state) = &spec.next_state {
            out.push_str(" : ");
            out.push_str(state);
        }
        out.push('\n');
        if i + 1 < block.specs.len() {
            out.push_str("| ");
        }
    }

    out.push_str("}\n\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use bnfdoc_grammar::{CharClassPart, Regex, RegexSpec, TokenBlockKind};

    #[test]
    fn test_implicit_block_renders_empty() {
        let block = TokenBlock::new(
            TokenBlockKind::Token,
            vec![RegexSpec::new(Regex::literal("+").in_token_context())],
        )
        .implicit();
        assert_eq!(token_block_text(&block), "");
    }

    #[test]
    fn test_all_states_header() {
        let block = TokenBlock::new(
            TokenBlockKind::Skip,
            vec![RegexSpec::new(Regex::literal(" ").in_token_context())],
        );
        assert_eq!(token_block_text(&block), "<*> SKIP : {\n\" \"\n}\n\n");
    }

    #[test]
    fn test_empty_state_list_means_all_states() {
        let block = TokenBlock::new(
            TokenBlockKind::Token,
            vec![RegexSpec::new(Regex::literal("a").in_token_context())],
        )
        .in_states(vec![]);
        assert_eq!(token_block_text(&block), "<*> TOKEN : {\n\"a\"\n}\n\n");
    }

    #[test]
    fn test_named_states_ignore_case_and_state_switch() {
        let digits = Regex::one_or_more(Regex::char_class(
            false,
            vec![CharClassPart::Range('0', '9')],
        ))
        .labeled("NUMBER")
        .in_token_context();
        let plus = Regex::literal("+").in_token_context();
        let block = TokenBlock::new(
            TokenBlockKind::Token,
            vec![
                RegexSpec::new(digits),
                RegexSpec::new(plus).switching_to("DEFAULT"),
            ],
        )
        .in_states(vec!["DEFAULT".to_string(), "IN_COMMENT".to_string()])
        .ignoring_case();

        assert_eq!(
            token_block_text(&block),
            "<DEFAULT,IN_COMMENT> TOKEN [IGNORE_CASE] : {\n\
             <NUMBER: ([\"0\"-\"9\"])+>\n\
             | \"+\" : DEFAULT\n\
             }\n\n"
        );
    }

    #[test]
    fn test_special_token_kind_keyword() {
        let block = TokenBlock::new(
            TokenBlockKind::Special,
            vec![RegexSpec::new(Regex::literal("//").in_token_context())],
        );
        assert!(token_block_text(&block).starts_with("<*> SPECIAL_TOKEN : {"));
    }
}
