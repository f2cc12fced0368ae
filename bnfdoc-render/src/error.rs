//! Error types for rendering operations

use std::fmt;

/// Errors that can occur while selecting a backend.
///
/// Rendering itself never fails: an unopenable output file degrades to
/// standard output with a warning, and the closed AST variant set leaves no
/// room for an unknown-node error.
#[derive(Debug, Clone)]
pub enum RenderError {
    /// No backend registered under the requested name
    BackendNotFound(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::BackendNotFound(name) => {
                write!(f, "Output format '{}' not found", name)
            }
        }
    }
}

impl std::error::Error for RenderError {}
