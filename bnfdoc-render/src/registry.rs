//! Backend registry for output-format discovery and selection
//!
//!     Backends register under a short name ("text", "dsl"); callers look them up to learn
//!     the output file extension and to create a generator for one document pass.

use std::collections::HashMap;

use bnfdoc_grammar::Grammar;

use crate::driver::render_grammar;
use crate::error::RenderError;
use crate::generator::Generator;
use crate::sink::OutputTarget;

/// A factory for one output format
pub trait Backend: Send + Sync {
    /// The name of this backend (e.g., "text", "dsl")
    fn name(&self) -> &str;

    /// Optional description of this backend
    fn description(&self) -> &str {
        ""
    }

    /// The file extension of this backend's output
    fn extension(&self) -> &str;

    /// Create a generator for one rendering pass over `grammar`
    fn create(&self, grammar: &Grammar, target: OutputTarget) -> Box<dyn Generator>;
}

/// Registry of output backends
pub struct BackendRegistry {
    backends: HashMap<String, Box<dyn Backend>>,
}

impl BackendRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        BackendRegistry {
            backends: HashMap::new(),
        }
    }

    /// Register a backend
    ///
    /// If a backend with the same name already exists, it will be replaced.
    pub fn register<B: Backend + 'static>(&mut self, backend: B) {
        self.backends
            .insert(backend.name().to_string(), Box::new(backend));
    }

    /// Get a backend by name
    pub fn get(&self, name: &str) -> Result<&dyn Backend, RenderError> {
        self.backends
            .get(name)
            .map(|b| b.as_ref())
            .ok_or_else(|| RenderError::BackendNotFound(name.to_string()))
    }

    /// Check if a backend exists
    pub fn has(&self, name: &str) -> bool {
        self.backends.contains_key(name)
    }

    /// List all available backend names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.backends.keys().cloned().collect();
        names.sort();
        names
    }

    /// Render `grammar` with the named backend into `target`
    pub fn render(
        &self,
        grammar: &Grammar,
        format: &str,
        target: OutputTarget,
    ) -> Result<(), RenderError> {
        let backend = self.get(format)?;
        let mut generator = backend.create(grammar, target);
        render_grammar(grammar, generator.as_mut());
        Ok(())
    }

    /// Create a registry with the built-in backends
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::backends::text::TextBackend);
        registry.register(crate::backends::dsl::DslBackend);

        registry
    }
}

impl Default for BackendRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
