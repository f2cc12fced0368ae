//! AST node definitions for grammar specifications
//!
//!     A grammar is two ordered collections: token-production blocks (lexical patterns, possibly
//!     scoped to lexical states) and productions (grammar rules plus opaque native-code blocks).
//!     A rule's right-hand side is an [Expansion](expansion::Expansion) tree whose leaves either
//!     reference other productions by name or wrap a [Regex](regex::Regex) pattern.
//!
//!     None of these types carry any rendering behavior; the bnfdoc-render crate walks them
//!     read-only. Constructor conveniences exist so upstream producers and tests can build
//!     trees without spelling out every field.

pub mod expansion;
pub mod production;
pub mod regex;
pub mod tokens;
