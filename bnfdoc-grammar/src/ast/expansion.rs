//! Expansion tree
//!
//!     Describes how a production's right-hand side is structured: sequencing, alternation,
//!     repetition, references to other productions, and regex leaves. Two variants carry no
//!     surface text at all: semantic actions and lookahead specifications exist in the source
//!     grammar but render to nothing, and a sequence skips them entirely (they contribute
//!     neither text nor a separator).

use serde::{Deserialize, Serialize};

use super::regex::Regex;

/// One node of a production's right-hand side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expansion {
    /// Ordered children, one after another
    Sequence(Vec<Expansion>),
    /// Ordered children, each a full alternative
    Alternation(Vec<Expansion>),
    OneOrMore(Box<Expansion>),
    ZeroOrMore(Box<Expansion>),
    ZeroOrOne(Box<Expansion>),
    /// Reference to another production by name
    NonTerminal { name: String },
    /// A regex leaf (an inline token pattern or a token reference)
    Terminal(Regex),
    /// Semantic action; renders as empty
    Action,
    /// Lookahead specification; renders as empty
    Lookahead,
    /// A try/recovery block around its child expansion
    TryBlock(Box<Expansion>),
}

impl Expansion {
    pub fn sequence(children: Vec<Expansion>) -> Self {
        Expansion::Sequence(children)
    }

    pub fn alternation(children: Vec<Expansion>) -> Self {
        Expansion::Alternation(children)
    }

    pub fn one_or_more(child: Expansion) -> Self {
        Expansion::OneOrMore(Box::new(child))
    }

    pub fn zero_or_more(child: Expansion) -> Self {
        Expansion::ZeroOrMore(Box::new(child))
    }

    pub fn zero_or_one(child: Expansion) -> Self {
        Expansion::ZeroOrOne(Box::new(child))
    }

    pub fn non_terminal(name: impl Into<String>) -> Self {
        Expansion::NonTerminal { name: name.into() }
    }

    pub fn try_block(child: Expansion) -> Self {
        Expansion::TryBlock(Box::new(child))
    }

    /// Whether this node never contributes surface text
    pub fn is_textless(&self) -> bool {
        matches!(self, Expansion::Action | Expansion::Lookahead)
    }
}
