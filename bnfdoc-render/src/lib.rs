//! Unparsing engine and output backends for bnfdoc
//!
//!     This crate turns a grammar AST back into human-readable notation. The recursive
//!     renderers reproduce, losslessly and deterministically, the precedence and grouping
//!     semantics of the notation from trees that carry no explicit parenthesization; every
//!     structural ambiguity is resolved by local, context-sensitive rules.
//!
//! Architecture
//!
//!     - Generator trait: the lifecycle/visitor contract a backend implements; hooks default
//!       to no-ops so backends override only what they need
//!     - Backend trait + BackendRegistry: discovery and selection of output formats
//!     - Driver: walks token blocks and productions once, in source order, invoking the
//!       generator hooks around calls into the renderers
//!
//!     This is a pure lib in the sense that rendering itself never touches the shell; the
//!     one exception is sink acquisition, which may warn on stderr when an output file
//!     cannot be opened and falls back to standard output so the pass still completes.
//!
//!     The file structure:
//!     .
//!     ├── error.rs            # RenderError
//!     ├── escape.rs           # Escaping utility for string literals and characters
//!     ├── regex.rs            # Regular-expression renderer
//!     ├── expansion.rs        # Expansion walker and pure expansion renderer
//!     ├── token_block.rs      # Token-production block renderer
//!     ├── generator.rs        # Generator contract and the capture generator
//!     ├── driver.rs           # Document traversal
//!     ├── sink.rs             # Output targets, fallback handling, output-path derivation
//!     ├── registry.rs         # Backend trait and BackendRegistry
//!     └── backends
//!         ├── text.rs         # Plain-text BNF backend
//!         └── dsl.rs          # Structured-DSL stub backend

pub mod backends;
pub mod driver;
pub mod error;
pub mod escape;
pub mod expansion;
pub mod generator;
pub mod regex;
pub mod registry;
pub mod sink;
pub mod token_block;

pub use backends::dsl::DslGenerator;
pub use backends::text::TextGenerator;
pub use driver::render_grammar;
pub use error::RenderError;
pub use escape::escape;
pub use expansion::{render_expansion, walk_expansion};
pub use generator::{Generator, TextCapture};
pub use regex::render_regex;
pub use registry::{Backend, BackendRegistry};
pub use sink::{derive_output_path, OutputTarget, Sink};
pub use token_block::token_block_text;
