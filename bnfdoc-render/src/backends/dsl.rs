//! Structured-DSL stub backend
//!
//!     Emits a grammar-DSL skeleton: a header line naming the grammar and declaring an
//!     import, then one declaration per production. Non-terminal references come out as a
//!     `terminal <name>;` placeholder and each alternative is terminated with `;`. Token
//!     blocks contribute nothing in this format.
//!
//!     The backend allocates a document-scoped anchor id per production name (`prod1`,
//!     `prod2`, ...) so cross-reference emission can name productions stably; allocation is
//!     a plain name-to-counter map with no cross-pass persistence.

use std::collections::HashMap;

use bnfdoc_grammar::{Expansion, Grammar, GrammarRule};

use crate::generator::Generator;
use crate::registry::Backend;
use crate::sink::{OutputTarget, Sink};

/// Document-scoped allocator of stable production anchor ids
#[derive(Debug)]
pub(crate) struct AnchorAllocator {
    ids: HashMap<String, u32>,
    next: u32,
}

impl AnchorAllocator {
    fn new() -> Self {
        Self {
            ids: HashMap::new(),
            next: 1,
        }
    }

    fn id(&mut self, name: &str) -> String {
        let next = &mut self.next;
        let n = *self.ids.entry(name.to_string()).or_insert_with(|| {
            let n = *next;
            *next += 1;
            n
        });
        format!("prod{}", n)
    }
}

/// Generator producing the structured-DSL stub
pub struct DslGenerator {
    grammar_name: String,
    sink: Sink,
    anchors: AnchorAllocator,
}

impl DslGenerator {
    pub fn new(grammar_name: impl Into<String>, target: OutputTarget) -> Self {
        Self {
            grammar_name: grammar_name.into(),
            sink: Sink::for_target(target),
            anchors: AnchorAllocator::new(),
        }
    }

    /// A generator writing to an in-memory buffer; see [`DslGenerator::take_output`]
    pub fn buffered(grammar_name: impl Into<String>) -> Self {
        Self {
            grammar_name: grammar_name.into(),
            sink: Sink::buffer(),
            anchors: AnchorAllocator::new(),
        }
    }

    /// Take the accumulated output out of a buffered generator
    pub fn take_output(&mut self) -> Option<String> {
        self.sink.take_string()
    }

    /// The anchor id allocated for a production name, allocating on first use
    pub fn anchor_id(&mut self, name: &str) -> String {
        self.anchors.id(name)
    }

    fn print(&mut self, s: &str) {
        self.sink.write_str(s);
    }

    fn println(&mut self, s: &str) {
        self.print(s);
        self.print("\n");
    }
}

impl Generator for DslGenerator {
    fn document_start(&mut self) {
        self.sink.open();
        let header = format!("grammar {} with common.Terminals", self.grammar_name);
        self.println(&header);
        self.println("import \"core\" as core");
        self.println("");
    }

    fn document_end(&mut self) {
        self.sink.finish();
    }

    fn text(&mut self, s: &str) {
        self.print(s);
    }

    fn special_tokens(&mut self, s: &str) {
        self.print(s);
    }

    fn production_start(&mut self, rule: &GrammarRule) {
        // Anchor allocation happens here so ids follow declaration order
        self.anchors.id(&rule.name);
    }

    fn expansion_end(&mut self, _exp: &Expansion, _first: bool) {
        self.println(";");
    }

    fn nonterminal_start(&mut self, _name: &str) {
        self.print("terminal ");
    }

    fn nonterminal_end(&mut self, _name: &str) {
        self.print(";");
    }
}

/// Registry entry for the structured-DSL backend
pub struct DslBackend;

impl Backend for DslBackend {
    fn name(&self) -> &str {
        "dsl"
    }

    fn description(&self) -> &str {
        "Structured grammar-DSL stub"
    }

    fn extension(&self) -> &str {
        "dsl"
    }

    fn create(&self, grammar: &Grammar, target: OutputTarget) -> Box<dyn Generator> {
        Box::new(DslGenerator::new(grammar.name.clone(), target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_ids_are_stable_and_monotonic() {
        let mut anchors = AnchorAllocator::new();
        assert_eq!(anchors.id("Expr"), "prod1");
        assert_eq!(anchors.id("Term"), "prod2");
        assert_eq!(anchors.id("Expr"), "prod1");
        assert_eq!(anchors.id("Factor"), "prod3");
    }

    #[test]
    fn test_fresh_generator_starts_a_fresh_id_space() {
        let mut first = DslGenerator::buffered("G");
        assert_eq!(first.anchor_id("Expr"), "prod1");
        let mut second = DslGenerator::buffered("G");
        assert_eq!(second.anchor_id("Term"), "prod1");
    }
}
