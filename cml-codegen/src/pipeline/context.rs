//! Compilation context passed through pipeline phases.

use cmlgen_config::GeneratorConfig;
use cmlgen_ir::Model;

use super::diagnostic::{Diagnostic, Severity};
use crate::{
    generation::{TypeRegistry, UnitPlan},
    resolver::CompiledRule,
};

/// Context passed through all pipeline phases.
///
/// Carries the model and options plus everything the phases derive from
/// them, accumulating diagnostics along the way.
#[derive(Debug)]
pub struct CompilationContext {
    pub model: Model,
    pub config: GeneratorConfig,
    /// Compiled path rules (populated by RulesPhase).
    pub rules: Option<Vec<CompiledRule>>,
    /// Units in output order (populated by ResolvePhase).
    pub plans: Vec<UnitPlan>,
    /// Original name to resolved identity (populated by ResolvePhase).
    pub registry: TypeRegistry,
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(model: Model, config: GeneratorConfig) -> Self {
        Self {
            model,
            config,
            rules: None,
            plans: Vec::new(),
            registry: TypeRegistry::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }
}
