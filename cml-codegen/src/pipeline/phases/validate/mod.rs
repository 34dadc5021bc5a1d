//! Lints over the resolved units.

mod lint;
pub mod lints;

use eyre::{Result, bail};
pub use lint::Lint;
pub use lints::{DuplicateOutputPathLint, DuplicateUnitNameLint};

use crate::pipeline::{CompilationContext, Phase};

/// Runs every registered [`Lint`]; any error-level finding aborts the run.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// The built-in name-collision lints.
    pub fn new() -> Self {
        Self::empty()
            .with_lint(DuplicateOutputPathLint)
            .with_lint(DuplicateUnitNameLint)
    }

    /// No lints; used to append language-specific ones after the built-ins.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Names of the lints, in run order.
    pub fn lint_names(&self) -> Vec<&'static str> {
        self.lints.iter().map(|l| l.name()).collect()
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Check resolved units and collect diagnostics"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let mut found = Vec::new();
        for lint in &self.lints {
            tracing::trace!(lint = lint.name(), "{}", lint.description());
            lint.check(ctx, &mut found);
        }
        ctx.diagnostics.append(&mut found);

        if ctx.has_errors() {
            bail!("validation failed with {} error(s)", ctx.error_count());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use cmlgen_config::GeneratorConfig;
    use cmlgen_ir::Model;

    use super::*;
    use crate::pipeline::Diagnostic;

    #[test]
    fn test_with_errors() {
        struct AlwaysErrorLint;
        impl Lint for AlwaysErrorLint {
            fn name(&self) -> &'static str {
                "always-error"
            }
            fn description(&self) -> &'static str {
                "Always produces an error"
            }
            fn check(&self, _ctx: &CompilationContext, diagnostics: &mut Vec<Diagnostic>) {
                diagnostics.push(Diagnostic::error("test", "forced error"));
            }
        }

        let mut ctx = CompilationContext::new(Model::default(), GeneratorConfig::default());
        let phase = ValidatePhase::empty().with_lint(AlwaysErrorLint);

        assert!(phase.run(&mut ctx).is_err());
        assert!(ctx.has_errors());
    }

    #[test]
    fn test_default_lints() {
        assert_eq!(
            ValidatePhase::new().lint_names(),
            vec!["duplicate-output-path", "duplicate-unit-name"]
        );
    }
}
