//! Lint for units that would overwrite each other.

use std::collections::HashMap;

use super::super::Lint;
use crate::pipeline::{CompilationContext, Diagnostic};

/// Lint that warns when two units resolve to the same output path.
///
/// Every unit is still generated; the later file replaces the earlier one
/// when written to disk.
pub struct DuplicateOutputPathLint;

impl Lint for DuplicateOutputPathLint {
    fn name(&self) -> &'static str {
        "duplicate-output-path"
    }

    fn description(&self) -> &'static str {
        "Detect units resolving to the same output file"
    }

    fn check(&self, ctx: &CompilationContext, diagnostics: &mut Vec<Diagnostic>) {
        let mut seen: HashMap<String, String> = HashMap::new();

        for plan in &ctx.plans {
            // case-insensitive file systems collide on case-only differences
            let normalized = plan.resolved.path.to_lowercase();
            match seen.get(&normalized) {
                Some(first) => diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!(
                            "{} '{}' resolves to '{}', already used by '{}'",
                            plan.kind, plan.name, plan.resolved.path, first
                        ),
                    )
                    .at(plan.location()),
                ),
                None => {
                    seen.insert(normalized, plan.location());
                }
            }
        }
    }
}
