//! Document traversal
//!
//!     Walks the full ordered collection of token blocks and productions exactly once,
//!     invoking the generator hooks around calls into the renderers. Rendering one document
//!     end-to-end is the unit of work: single-threaded, single-pass, no caching across calls.
//!
//!     A production whose root is an alternation gets one `expansion_start`/`expansion_end`
//!     hook pair per direct alternative, with the `first` flag letting the backend emit its
//!     own separator before all but the first. This hook-driven path is distinct from the
//!     ` | ` joiner used for alternations nested inside an expansion, and stays that way.

use bnfdoc_grammar::{reconstruct_special_text, Expansion, Grammar, Production, SpecialToken};

use crate::expansion::walk_expansion;
use crate::generator::Generator;

/// Run one full rendering pass over `grammar`, driving `gen` through the
/// documented hook sequence.
pub fn render_grammar(grammar: &Grammar, gen: &mut dyn Generator) {
    gen.document_start();
    emit_token_blocks(grammar, gen);
    emit_productions(grammar, gen);
    gen.document_end();
}

fn emit_leading(tokens: &[SpecialToken], gen: &mut dyn Generator) {
    let text = reconstruct_special_text(tokens);
    if !text.is_empty() {
        gen.special_tokens(&text);
    }
}

fn emit_token_blocks(grammar: &Grammar, gen: &mut dyn Generator) {
    gen.tokens_start();
    for block in &grammar.token_blocks {
        emit_leading(&block.leading, gen);
        gen.handle_token_block(block);
    }
    gen.tokens_end();
}

fn emit_productions(grammar: &Grammar, gen: &mut dyn Generator) {
    gen.nonterminals_start();
    for production in &grammar.productions {
        emit_leading(production.leading(), gen);
        match production {
            Production::Rule(rule) => {
                gen.production_start(rule);
                match &rule.expansion {
                    Expansion::Alternation(alternatives) => {
                        let mut first = true;
                        for alternative in alternatives {
                            gen.expansion_start(alternative, first);
                            walk_expansion(alternative, gen);
                            gen.expansion_end(alternative, first);
                            first = false;
                        }
                    }
                    expansion => {
                        gen.expansion_start(expansion, true);
                        walk_expansion(expansion, gen);
                        gen.expansion_end(expansion, true);
                    }
                }
                gen.production_end(rule);
            }
            Production::NativeBlock(block) => {
                gen.native_code(block);
            }
        }
    }
    gen.nonterminals_end();
}
