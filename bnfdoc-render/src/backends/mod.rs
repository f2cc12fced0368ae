//! Backend implementations
//!
//!     Concrete implementations of the Generator contract. Each backend holds only its output
//!     sink and small per-document counters; all document state lives in the AST it is handed.

pub mod dsl;
pub mod text;

pub use dsl::{DslBackend, DslGenerator};
pub use text::{TextBackend, TextGenerator};
