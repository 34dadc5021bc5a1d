//! Hooks around pipeline phases.

use eyre::Result;

use super::CompilationContext;

/// Observer called around every phase.
///
/// Plugins may inspect or adjust the context between phases; returning an
/// error stops the pipeline.
pub trait Plugin: Send + Sync {
    fn name(&self) -> &'static str;

    #[allow(unused_variables)]
    fn on_before_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }

    #[allow(unused_variables)]
    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }
}
