//! Productions and the top-level grammar
//!
//!     A production is either a grammar rule (a name plus an expansion tree) or a native-code
//!     block, which owns a name but whose body is never unparsed; backends render it as an
//!     opaque placeholder. The grammar holds both collections in source order.

use serde::{Deserialize, Serialize};

use super::expansion::Expansion;
use super::tokens::TokenBlock;
use crate::trivia::SpecialToken;

/// A grammar rule: name plus the expansion tree of its right-hand side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrammarRule {
    pub name: String,
    pub expansion: Expansion,
    /// Comment/whitespace tokens that textually preceded this rule
    #[serde(default)]
    pub leading: Vec<SpecialToken>,
}

impl GrammarRule {
    pub fn new(name: impl Into<String>, expansion: Expansion) -> Self {
        Self {
            name: name.into(),
            expansion,
            leading: Vec::new(),
        }
    }

    pub fn with_leading(mut self, leading: Vec<SpecialToken>) -> Self {
        self.leading = leading;
        self
    }
}

/// A production written in the host language; its body is opaque to the renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NativeBlock {
    pub name: String,
    #[serde(default)]
    pub leading: Vec<SpecialToken>,
}

impl NativeBlock {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            leading: Vec::new(),
        }
    }

    pub fn with_leading(mut self, leading: Vec<SpecialToken>) -> Self {
        self.leading = leading;
        self
    }
}

/// One production of the grammar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Production {
    Rule(GrammarRule),
    NativeBlock(NativeBlock),
}

impl Production {
    /// The comment/whitespace tokens preceding this production
    pub fn leading(&self) -> &[SpecialToken] {
        match self {
            Production::Rule(rule) => &rule.leading,
            Production::NativeBlock(block) => &block.leading,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Production::Rule(rule) => &rule.name,
            Production::NativeBlock(block) => &block.name,
        }
    }
}

/// A full parsed grammar, ready for rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grammar {
    pub name: String,
    pub token_blocks: Vec<TokenBlock>,
    pub productions: Vec<Production>,
}

impl Grammar {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            token_blocks: Vec::new(),
            productions: Vec::new(),
        }
    }
}
