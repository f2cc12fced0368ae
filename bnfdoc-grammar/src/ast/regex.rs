//! Regular-expression tree
//!
//!     Describes how a token matches input. Every node carries three pieces of decoration
//!     besides its shape: an optional label (empty string = unlabeled), a private flag
//!     (definitions that cannot be referenced from outside the lexical layer), and a marker
//!     telling whether the node is the top-level pattern of a token-production entry. The
//!     renderer uses that marker alone to decide whether angle-bracket decoration is emitted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry of a character class: either a single character or an inclusive range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CharClassPart {
    Single(char),
    Range(char, char),
}

/// The shape of a regular-expression node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RegexKind {
    /// A literal string, matched verbatim
    Literal(String),
    /// A character class, optionally negated
    CharClass {
        negated: bool,
        parts: Vec<CharClassPart>,
    },
    /// Ordered alternatives
    Alternation(Vec<Regex>),
    /// Ordered sub-patterns matched one after another
    Sequence(Vec<Regex>),
    OneOrMore(Box<Regex>),
    ZeroOrMore(Box<Regex>),
    ZeroOrOne(Box<Regex>),
    /// Bounded repetition; `max == None` means "exactly min"
    Repeat {
        inner: Box<Regex>,
        min: u32,
        max: Option<u32>,
    },
    /// Reference to another named regex definition
    Reference(String),
    /// End of the input stream
    EndOfInput,
}

/// A regular-expression node with its decoration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Regex {
    pub kind: RegexKind,
    /// Token name this pattern is bound to; empty = unlabeled
    #[serde(default)]
    pub label: String,
    /// Private definitions are not directly referenceable externally
    #[serde(default)]
    pub private_def: bool,
    /// Set when this node is the top-level pattern of a token-production entry,
    /// as opposed to a nested sub-pattern
    #[serde(default)]
    pub token_context: bool,
}

impl Regex {
    pub fn new(kind: RegexKind) -> Self {
        Self {
            kind,
            label: String::new(),
            private_def: false,
            token_context: false,
        }
    }

    pub fn literal(text: impl Into<String>) -> Self {
        Self::new(RegexKind::Literal(text.into()))
    }

    pub fn reference(name: impl Into<String>) -> Self {
        Self::new(RegexKind::Reference(name.into()))
    }

    pub fn end_of_input() -> Self {
        Self::new(RegexKind::EndOfInput)
    }

    pub fn char_class(negated: bool, parts: Vec<CharClassPart>) -> Self {
        Self::new(RegexKind::CharClass { negated, parts })
    }

    pub fn alternation(subs: Vec<Regex>) -> Self {
        Self::new(RegexKind::Alternation(subs))
    }

    pub fn sequence(subs: Vec<Regex>) -> Self {
        Self::new(RegexKind::Sequence(subs))
    }

    pub fn one_or_more(inner: Regex) -> Self {
        Self::new(RegexKind::OneOrMore(Box::new(inner)))
    }

    pub fn zero_or_more(inner: Regex) -> Self {
        Self::new(RegexKind::ZeroOrMore(Box::new(inner)))
    }

    pub fn zero_or_one(inner: Regex) -> Self {
        Self::new(RegexKind::ZeroOrOne(Box::new(inner)))
    }

    pub fn repeat(inner: Regex, min: u32, max: Option<u32>) -> Self {
        Self::new(RegexKind::Repeat {
            inner: Box::new(inner),
            min,
            max,
        })
    }

    /// Attach a token label (builder style)
    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Mark as a private definition (builder style)
    pub fn private(mut self) -> Self {
        self.private_def = true;
        self
    }

    /// Mark as the top-level pattern of a token-production entry (builder style)
    pub fn in_token_context(mut self) -> Self {
        self.token_context = true;
        self
    }

    pub fn is_labeled(&self) -> bool {
        !self.label.is_empty()
    }
}

impl fmt::Display for Regex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.label.is_empty() {
            write!(f, "Regex({:?})", self.kind)
        } else {
            write!(f, "Regex(<{}>)", self.label)
        }
    }
}
