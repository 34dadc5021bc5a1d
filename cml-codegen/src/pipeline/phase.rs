//! Pipeline phase trait.

use eyre::Result;

use super::CompilationContext;

/// One step of the pipeline.
///
/// The built-in phases run in this order: `rules`, `resolve`, `validate`.
pub trait Phase: Send + Sync {
    /// Name passed to plugin hooks.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Non-fatal findings go into `ctx.diagnostics`; an `Err` aborts the run.
    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;
}
