//! Expansion renderer
//!
//!     Walks an expansion tree, streaming text fragments and per-node hooks through a
//!     generator. Sequences skip textless children (actions, lookaheads) entirely, emitting
//!     no text and no separator, and parenthesize a child that is itself an alternation or a
//!     sequence.
//!     A nested alternation joins its children with ` | `; the top-level alternatives of a
//!     production are NOT handled here but by the driver through the generator's
//!     `expansion_start`/`expansion_end` hook pairs, and the two paths are deliberately kept
//!     separate: backends may rely on the hook-driven path for per-alternative document
//!     structure that a plain joiner cannot express.

use bnfdoc_grammar::Expansion;

use crate::generator::{Generator, TextCapture};
use crate::regex::render_regex;

/// Walk one expansion node, streaming its rendering through `gen`.
pub fn walk_expansion(exp: &Expansion, gen: &mut dyn Generator) {
    match exp {
        Expansion::Action | Expansion::Lookahead => {}
        Expansion::Sequence(children) => walk_sequence(children, gen),
        Expansion::Alternation(children) => {
            for (i, child) in children.iter().enumerate() {
                if i > 0 {
                    gen.text(" | ");
                }
                walk_expansion(child, gen);
            }
        }
        Expansion::OneOrMore(child) => {
            gen.text("( ");
            walk_expansion(child, gen);
            gen.text(" )+");
        }
        Expansion::ZeroOrMore(child) => {
            gen.text("( ");
            walk_expansion(child, gen);
            gen.text(" )*");
        }
        Expansion::ZeroOrOne(child) => {
            gen.text("( ");
            walk_expansion(child, gen);
            gen.text(" )?");
        }
        Expansion::NonTerminal { name } => {
            gen.nonterminal_start(name);
            gen.text(name);
            gen.nonterminal_end(name);
        }
        Expansion::Terminal(re) => {
            let rendered = render_regex(re);
            if !rendered.is_empty() {
                gen.re_start(re);
                gen.text(&rendered);
                gen.re_end(re);
            }
        }
        Expansion::TryBlock(child) => {
            let needs_parens = matches!(**child, Expansion::Alternation(_));
            if needs_parens {
                gen.text("( ");
            }
            walk_expansion(child, gen);
            if needs_parens {
                gen.text(" )");
            }
        }
    }
}

/// Whether a sequence child contributes no surface text at all.
///
/// Besides the two textless variants, a regex leaf whose rendering comes out
/// empty is skipped the same way, so it never costs the sequence a separator.
fn is_silent(child: &Expansion) -> bool {
    match child {
        Expansion::Terminal(re) => render_regex(re).is_empty(),
        _ => child.is_textless(),
    }
}

fn walk_sequence(children: &[Expansion], gen: &mut dyn Generator) {
    let mut first_unit = true;
    for child in children {
        if is_silent(child) {
            continue;
        }
        if !first_unit {
            gen.text(" ");
        }
        let needs_parens = matches!(
            child,
            Expansion::Alternation(_) | Expansion::Sequence(_)
        );
        if needs_parens {
            gen.text("( ");
        }
        walk_expansion(child, gen);
        if needs_parens {
            gen.text(" )");
        }
        first_unit = false;
    }
}

/// Render one expansion node to a string.
pub fn render_expansion(exp: &Expansion) -> String {
    let mut capture = TextCapture::new();
    walk_expansion(exp, &mut capture);
    capture.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bnfdoc_grammar::Regex;

    #[test]
    fn test_sequence_of_two_nonterminals() {
        let exp = Expansion::sequence(vec![
            Expansion::non_terminal("A"),
            Expansion::non_terminal("B"),
        ]);
        assert_eq!(render_expansion(&exp), "A B");
    }

    #[test]
    fn test_one_or_more_around_nonterminal() {
        let exp = Expansion::one_or_more(Expansion::non_terminal("C"));
        assert_eq!(render_expansion(&exp), "( C )+");
    }

    #[test]
    fn test_sequence_skips_actions_and_lookaheads() {
        let exp = Expansion::sequence(vec![
            Expansion::Lookahead,
            Expansion::non_terminal("A"),
            Expansion::Action,
            Expansion::non_terminal("B"),
            Expansion::Action,
        ]);
        // Two surviving children, exactly one separator
        assert_eq!(render_expansion(&exp), "A B");
    }

    #[test]
    fn test_sequence_parenthesizes_nested_alternation_and_sequence() {
        let exp = Expansion::sequence(vec![
            Expansion::non_terminal("A"),
            Expansion::alternation(vec![
                Expansion::non_terminal("B"),
                Expansion::non_terminal("C"),
            ]),
            Expansion::sequence(vec![
                Expansion::non_terminal("D"),
                Expansion::non_terminal("E"),
            ]),
        ]);
        assert_eq!(render_expansion(&exp), "A ( B | C ) ( D E )");
    }

    #[test]
    fn test_nested_alternation_joins_without_outer_parens() {
        let exp = Expansion::alternation(vec![
            Expansion::non_terminal("A"),
            Expansion::non_terminal("B"),
            Expansion::non_terminal("C"),
        ]);
        assert_eq!(render_expansion(&exp), "A | B | C");
    }

    #[test]
    fn test_try_block_parenthesizes_only_alternations() {
        let plain = Expansion::try_block(Expansion::non_terminal("A"));
        assert_eq!(render_expansion(&plain), "A");

        let choice = Expansion::try_block(Expansion::alternation(vec![
            Expansion::non_terminal("A"),
            Expansion::non_terminal("B"),
        ]));
        assert_eq!(render_expansion(&choice), "( A | B )");
    }

    #[test]
    fn test_zero_or_more_and_zero_or_one() {
        let star = Expansion::zero_or_more(Expansion::non_terminal("X"));
        assert_eq!(render_expansion(&star), "( X )*");
        let opt = Expansion::zero_or_one(Expansion::non_terminal("X"));
        assert_eq!(render_expansion(&opt), "( X )?");
    }

    #[test]
    fn test_terminal_leaf_delegates_to_regex_renderer() {
        let exp = Expansion::sequence(vec![
            Expansion::non_terminal("Term"),
            Expansion::Terminal(Regex::literal("+")),
            Expansion::non_terminal("Expr"),
        ]);
        assert_eq!(render_expansion(&exp), "Term \"+\" Expr");
    }

    #[test]
    fn test_textless_nodes_render_empty() {
        assert_eq!(render_expansion(&Expansion::Action), "");
        assert_eq!(render_expansion(&Expansion::Lookahead), "");
    }
}
