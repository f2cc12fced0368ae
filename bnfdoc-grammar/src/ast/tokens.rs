//! Token-production blocks
//!
//!     A token-production block groups an ordered list of lexical pattern definitions under a
//!     lex-state selector and a kind keyword. Only explicit blocks (ones the grammar author
//!     wrote out) are rendered; blocks synthesized by the upstream analyzer for inline literals
//!     keep their contents but produce no output.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::regex::Regex;
use crate::trivia::SpecialToken;

/// The kind keyword of a token-production block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenBlockKind {
    /// Ordinary tokens, passed to the parser
    Token,
    /// Matched and discarded
    Skip,
    /// Matched and prepended to the next token
    More,
    /// Matched and preserved out-of-band (comments and the like)
    Special,
}

impl TokenBlockKind {
    /// The keyword as written in grammar notation
    pub fn keyword(self) -> &'static str {
        match self {
            TokenBlockKind::Token => "TOKEN",
            TokenBlockKind::Skip => "SKIP",
            TokenBlockKind::More => "MORE",
            TokenBlockKind::Special => "SPECIAL_TOKEN",
        }
    }
}

impl fmt::Display for TokenBlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// One entry of a token-production block: a pattern plus an optional lexical-state switch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegexSpec {
    pub regex: Regex,
    /// Lexical state to switch to after this pattern matches
    #[serde(default)]
    pub next_state: Option<String>,
}

impl RegexSpec {
    pub fn new(regex: Regex) -> Self {
        Self {
            regex,
            next_state: None,
        }
    }

    pub fn switching_to(mut self, state: impl Into<String>) -> Self {
        self.next_state = Some(state.into());
        self
    }
}

// Serde default for `explicit`, matching `TokenBlock::new`
fn default_explicit() -> bool {
    true
}

/// A grouped set of lexical pattern definitions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenBlock {
    pub kind: TokenBlockKind,
    /// Lexical states this block applies to; `None` or an empty list = all states
    #[serde(default)]
    pub lex_states: Option<Vec<String>>,
    #[serde(default)]
    pub ignore_case: bool,
    /// Only blocks the grammar author wrote explicitly are rendered
    #[serde(default = "default_explicit")]
    pub explicit: bool,
    pub specs: Vec<RegexSpec>,
    /// Comment/whitespace tokens that textually preceded this block
    #[serde(default)]
    pub leading: Vec<SpecialToken>,
}

impl TokenBlock {
    pub fn new(kind: TokenBlockKind, specs: Vec<RegexSpec>) -> Self {
        Self {
            kind,
            lex_states: None,
            ignore_case: false,
            explicit: true,
            specs,
            leading: Vec::new(),
        }
    }

    pub fn in_states(mut self, states: Vec<String>) -> Self {
        self.lex_states = Some(states);
        self
    }

    pub fn ignoring_case(mut self) -> Self {
        self.ignore_case = true;
        self
    }

    pub fn implicit(mut self) -> Self {
        self.explicit = false;
        self
    }

    pub fn with_leading(mut self, leading: Vec<SpecialToken>) -> Self {
        self.leading = leading;
        self
    }
}
