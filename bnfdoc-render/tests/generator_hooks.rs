//! Tests for the generator hook sequence
//!
//! A recording generator captures every hook invocation so the driver's call
//! order can be asserted directly: document bracketing, section markers, one
//! expansion_start/expansion_end pair per top-level alternative with the
//! `first` flag, and the dedicated native-code path.

use bnfdoc_grammar::{
    Expansion, Grammar, GrammarRule, NativeBlock, Production, Regex, RegexSpec, SpecialToken,
    TokenBlock, TokenBlockKind,
};
use bnfdoc_render::{render_grammar, Generator};

#[derive(Default)]
struct RecordingGenerator {
    events: Vec<String>,
}

impl Generator for RecordingGenerator {
    fn document_start(&mut self) {
        self.events.push("document_start".into());
    }
    fn document_end(&mut self) {
        self.events.push("document_end".into());
    }
    fn text(&mut self, s: &str) {
        self.events.push(format!("text({:?})", s));
    }
    fn special_tokens(&mut self, s: &str) {
        self.events.push(format!("special_tokens({:?})", s));
    }
    fn tokens_start(&mut self) {
        self.events.push("tokens_start".into());
    }
    fn handle_token_block(&mut self, _block: &TokenBlock) {
        self.events.push("handle_token_block".into());
    }
    fn tokens_end(&mut self) {
        self.events.push("tokens_end".into());
    }
    fn nonterminals_start(&mut self) {
        self.events.push("nonterminals_start".into());
    }
    fn nonterminals_end(&mut self) {
        self.events.push("nonterminals_end".into());
    }
    fn production_start(&mut self, rule: &GrammarRule) {
        self.events.push(format!("production_start({})", rule.name));
    }
    fn production_end(&mut self, rule: &GrammarRule) {
        self.events.push(format!("production_end({})", rule.name));
    }
    fn expansion_start(&mut self, _exp: &Expansion, first: bool) {
        self.events.push(format!("expansion_start(first={})", first));
    }
    fn expansion_end(&mut self, _exp: &Expansion, first: bool) {
        self.events.push(format!("expansion_end(first={})", first));
    }
    fn native_code(&mut self, block: &NativeBlock) {
        self.events.push(format!("native_code({})", block.name));
    }
}

#[test]
fn test_top_level_alternation_gets_one_hook_pair_per_alternative() {
    let mut grammar = Grammar::new("G");
    grammar
        .productions
        .push(Production::Rule(GrammarRule::new(
            "P",
            Expansion::alternation(vec![
                Expansion::Terminal(Regex::literal("x")),
                Expansion::Terminal(Regex::literal("y")),
            ]),
        )));

    let mut gen = RecordingGenerator::default();
    render_grammar(&grammar, &mut gen);

    assert_eq!(
        gen.events,
        vec![
            "document_start",
            "tokens_start",
            "tokens_end",
            "nonterminals_start",
            "production_start(P)",
            "expansion_start(first=true)",
            "text(\"\\\"x\\\"\")",
            "expansion_end(first=true)",
            "expansion_start(first=false)",
            "text(\"\\\"y\\\"\")",
            "expansion_end(first=false)",
            "production_end(P)",
            "nonterminals_end",
            "document_end",
        ]
    );
}

#[test]
fn test_not_first_fires_alternative_count_minus_one_times() {
    let alternatives: Vec<Expansion> = ["A", "B", "C", "D"]
        .iter()
        .map(|name| Expansion::non_terminal(*name))
        .collect();
    let count = alternatives.len();

    let mut grammar = Grammar::new("G");
    grammar
        .productions
        .push(Production::Rule(GrammarRule::new(
            "P",
            Expansion::alternation(alternatives),
        )));

    let mut gen = RecordingGenerator::default();
    render_grammar(&grammar, &mut gen);

    let not_first = gen
        .events
        .iter()
        .filter(|e| *e == "expansion_start(first=false)")
        .count();
    assert_eq!(not_first, count - 1);
}

#[test]
fn test_non_alternation_root_gets_a_single_first_pair() {
    let mut grammar = Grammar::new("G");
    grammar
        .productions
        .push(Production::Rule(GrammarRule::new(
            "P",
            Expansion::non_terminal("Q"),
        )));

    let mut gen = RecordingGenerator::default();
    render_grammar(&grammar, &mut gen);

    let starts: Vec<&str> = gen
        .events
        .iter()
        .filter(|e| e.starts_with("expansion_start"))
        .map(|e| e.as_str())
        .collect();
    assert_eq!(starts, vec!["expansion_start(first=true)"]);
}

#[test]
fn test_native_block_uses_the_dedicated_hook() {
    let mut grammar = Grammar::new("G");
    grammar
        .productions
        .push(Production::NativeBlock(NativeBlock::new("helper")));

    let mut gen = RecordingGenerator::default();
    render_grammar(&grammar, &mut gen);

    assert!(gen.events.contains(&"native_code(helper)".to_string()));
    assert!(!gen
        .events
        .iter()
        .any(|e| e.starts_with("production_start")));
}

#[test]
fn test_special_tokens_fire_before_their_construct() {
    let mut grammar = Grammar::new("G");
    grammar.token_blocks.push(
        TokenBlock::new(
            TokenBlockKind::Token,
            vec![RegexSpec::new(Regex::literal("a").in_token_context())],
        )
        .with_leading(vec![SpecialToken::new("// lead\n", 1, 1)]),
    );

    let mut gen = RecordingGenerator::default();
    render_grammar(&grammar, &mut gen);

    assert_eq!(
        gen.events,
        vec![
            "document_start",
            "tokens_start",
            "special_tokens(\"// lead\\n\")",
            "handle_token_block",
            "tokens_end",
            "nonterminals_start",
            "nonterminals_end",
            "document_end",
        ]
    );
}

#[test]
fn test_empty_trivia_run_fires_no_special_tokens_hook() {
    let mut grammar = Grammar::new("G");
    grammar
        .productions
        .push(Production::Rule(GrammarRule::new(
            "P",
            Expansion::non_terminal("Q"),
        )));

    let mut gen = RecordingGenerator::default();
    render_grammar(&grammar, &mut gen);

    assert!(!gen
        .events
        .iter()
        .any(|e| e.starts_with("special_tokens")));
}
