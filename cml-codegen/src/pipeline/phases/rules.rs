//! Rules phase - compiles path rules.

use eyre::Result;

use crate::{
    pipeline::{CompilationContext, Phase},
    resolver::compile_rules,
};

/// Phase that compiles the configured path rules.
///
/// Rules that fail to compile are reported as warnings and left out.
pub struct RulesPhase;

impl Phase for RulesPhase {
    fn name(&self) -> &'static str {
        "rules"
    }

    fn description(&self) -> &'static str {
        "Compile path rules"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let (rules, warnings) = compile_rules(&ctx.config.path_rules);
        ctx.diagnostics.extend(warnings);
        ctx.rules = Some(rules);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use cmlgen_config::{GeneratorConfig, PathRule};
    use cmlgen_ir::Model;

    use super::*;

    #[test]
    fn test_rules_phase_reports_invalid_patterns() {
        let config = GeneratorConfig {
            path_rules: vec![PathRule::new("[", "Broken"), PathRule::new("Event$", "Events")],
            ..GeneratorConfig::default()
        };
        let mut ctx = CompilationContext::new(Model::default(), config);

        RulesPhase.run(&mut ctx).expect("rules phase never fails");

        assert_eq!(ctx.rules.as_ref().map(Vec::len), Some(1));
        assert_eq!(ctx.warning_count(), 1);
        assert!(!ctx.has_errors());
    }
}
