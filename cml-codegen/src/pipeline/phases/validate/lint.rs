//! Lint trait for resolved-unit validation.

use crate::pipeline::{CompilationContext, Diagnostic};

/// A check over the model and its resolved units.
pub trait Lint: Send + Sync {
    /// Kebab-case identifier, e.g. `duplicate-output-path`.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn check(&self, ctx: &CompilationContext, diagnostics: &mut Vec<Diagnostic>);
}
