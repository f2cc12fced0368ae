//! Grammar AST definitions for the bnfdoc toolchain
//!
//!     This crate holds the data model that the rendering engine consumes: the expansion tree
//!     describing a production's right-hand side, the regular-expression tree describing a
//!     token's matching pattern, token-production blocks, and the productions themselves.
//!
//!     Nodes are constructed once by an upstream producer (a grammar parser / analyzer, which
//!     lives outside this repository) and are read-only for the duration of a rendering pass.
//!     Everything derives serde so a grammar can be loaded from and dumped to JSON, which is
//!     how the CLI receives its input.
//!
//!     The file structure:
//!     .
//!     ├── ast
//!     │   ├── expansion.rs    # Expansion tree (sequences, alternations, repetitions)
//!     │   ├── regex.rs        # Regular-expression tree and character classes
//!     │   ├── tokens.rs       # Token-production blocks and per-pattern specs
//!     │   └── production.rs   # Productions and the top-level Grammar
//!     ├── trivia.rs           # Special tokens (comments/whitespace) and layout reconstruction
//!     └── lib.rs

pub mod ast;
pub mod trivia;

pub use ast::expansion::Expansion;
pub use ast::production::{Grammar, GrammarRule, NativeBlock, Production};
pub use ast::regex::{CharClassPart, Regex, RegexKind};
pub use ast::tokens::{RegexSpec, TokenBlock, TokenBlockKind};
pub use trivia::{reconstruct_special_text, LayoutCursor, SpecialToken};
