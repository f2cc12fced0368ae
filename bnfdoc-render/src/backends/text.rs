//! Plain-text BNF backend
//!
//!     Emits the whole grammar as tab-aligned plain text: `DOCUMENT START`/`DOCUMENT END`
//!     bracket the document, `TOKENS` and `NON-TERMINALS` head the two sections, each
//!     production is `\t<name>\t:=\t` followed by its alternatives separated by `\n\t\t|\t`,
//!     and token blocks appear exactly as the token-block renderer produces them.

use bnfdoc_grammar::{Expansion, Grammar, GrammarRule, NativeBlock, TokenBlock};

use crate::generator::Generator;
use crate::registry::Backend;
use crate::sink::{OutputTarget, Sink};
use crate::token_block::token_block_text;

/// Generator producing plain-text BNF
pub struct TextGenerator {
    sink: Sink,
}

impl TextGenerator {
    pub fn new(target: OutputTarget) -> Self {
        Self {
            sink: Sink::for_target(target),
        }
    }

    /// A generator writing to an in-memory buffer; see [`TextGenerator::take_output`]
    pub fn buffered() -> Self {
        Self {
            sink: Sink::buffer(),
        }
    }

    /// Take the accumulated output out of a buffered generator
    pub fn take_output(&mut self) -> Option<String> {
        self.sink.take_string()
    }

    fn print(&mut self, s: &str) {
        self.sink.write_str(s);
    }
}

impl Generator for TextGenerator {
    fn document_start(&mut self) {
        self.sink.open();
        self.print("\nDOCUMENT START\n");
    }

    fn document_end(&mut self) {
        self.print("\nDOCUMENT END\n");
        self.sink.finish();
    }

    fn text(&mut self, s: &str) {
        self.print(s);
    }

    fn special_tokens(&mut self, s: &str) {
        self.print(s);
    }

    fn tokens_start(&mut self) {
        self.print("TOKENS\n");
    }

    fn handle_token_block(&mut self, block: &TokenBlock) {
        let text = token_block_text(block);
        self.print(&text);
    }

    fn nonterminals_start(&mut self) {
        self.print("NON-TERMINALS\n");
    }

    fn production_start(&mut self, rule: &GrammarRule) {
        self.print(&format!("\t{}\t:=\t", rule.name));
    }

    fn production_end(&mut self, _rule: &GrammarRule) {
        self.print("\n");
    }

    fn expansion_start(&mut self, _exp: &Expansion, first: bool) {
        if !first {
            self.print("\n\t\t|\t");
        }
    }

    fn native_code(&mut self, block: &NativeBlock) {
        self.print(&format!("\t{}\t:=\t", block.name));
        self.print("native code");
        self.print("\n");
    }
}

/// Registry entry for the plain-text backend
pub struct TextBackend;

impl Backend for TextBackend {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Plain-text BNF"
    }

    fn extension(&self) -> &str {
        "txt"
    }

    fn create(&self, _grammar: &Grammar, target: OutputTarget) -> Box<dyn Generator> {
        Box::new(TextGenerator::new(target))
    }
}
