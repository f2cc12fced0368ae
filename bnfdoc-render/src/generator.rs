//! Generator contract
//!
//!     The lifecycle/visitor interface a rendering backend implements. The driver calls the
//!     hooks in a fixed sequence, one rendering pass per document:
//!
//!     1. `document_start`: the backend opens its output sink
//!     2. `tokens_start`, then per token block in source order: `special_tokens` for any
//!        reconstructed comment/whitespace text, then `handle_token_block`; then `tokens_end`
//!     3. `nonterminals_start`, then per production: `special_tokens`, `production_start`,
//!        one `expansion_start`/body/`expansion_end` triple per top-level alternative (with a
//!        `first` flag so the backend can emit its own separator before all but the first),
//!        `production_end` (or `native_code` for a native-code production); then
//!        `nonterminals_end`
//!     4. `document_end`: the backend closes its sink
//!
//!     Only `document_start`, `document_end` and `text` are required; every other hook
//!     defaults to a no-op, so backends override just the ones they need.

use bnfdoc_grammar::{Expansion, GrammarRule, NativeBlock, Regex, TokenBlock};

/// Visitor-style contract implemented by output backends
pub trait Generator {
    /// Open the output sink and emit any document prologue
    fn document_start(&mut self);

    /// Emit any document epilogue and close the sink
    fn document_end(&mut self);

    /// Raw text fragment produced by the renderers
    fn text(&mut self, s: &str);

    /// Reconstructed comment/whitespace text that preceded a construct
    fn special_tokens(&mut self, _s: &str) {}

    fn tokens_start(&mut self) {}
    fn handle_token_block(&mut self, _block: &TokenBlock) {}
    fn tokens_end(&mut self) {}

    fn nonterminals_start(&mut self) {}
    fn nonterminals_end(&mut self) {}

    fn production_start(&mut self, _rule: &GrammarRule) {}
    fn production_end(&mut self, _rule: &GrammarRule) {}

    /// Called once per top-level alternative; `first` is true only for the first
    fn expansion_start(&mut self, _exp: &Expansion, _first: bool) {}
    fn expansion_end(&mut self, _exp: &Expansion, _first: bool) {}

    fn nonterminal_start(&mut self, _name: &str) {}
    fn nonterminal_end(&mut self, _name: &str) {}

    fn re_start(&mut self, _re: &Regex) {}
    fn re_end(&mut self, _re: &Regex) {}

    /// A production written in the host language; its body is opaque
    fn native_code(&mut self, _block: &NativeBlock) {}
}

/// A generator that collects every text fragment into a string.
///
/// Used to realize the pure `render(expansion) -> text` form of the expansion
/// renderer, and handy in tests.
#[derive(Debug, Default)]
pub struct TextCapture {
    buffer: String,
}

impl TextCapture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_string(self) -> String {
        self.buffer
    }
}

impl Generator for TextCapture {
    fn document_start(&mut self) {}

    fn document_end(&mut self) {}

    fn text(&mut self, s: &str) {
        self.buffer.push_str(s);
    }
}
