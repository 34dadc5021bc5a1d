//! Resolve phase - places every unit.

use cmlgen_core::UnitKind;
use eyre::Result;

use crate::{
    generation::{UnitInfo, UnitPlan},
    pipeline::{CompilationContext, Phase},
    resolver::{Layout, UnitRef, resolve_path},
};

/// Phase that resolves output path, namespace and final name of every unit.
///
/// Units are planned in output order: per bounded context, per aggregate,
/// enums first, then value objects, then entities. This phase must run after
/// `RulesPhase`.
pub struct ResolvePhase;

impl Phase for ResolvePhase {
    fn name(&self) -> &'static str {
        "resolve"
    }

    fn description(&self) -> &'static str {
        "Resolve output paths, namespaces and identifiers"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let rules = ctx
            .rules
            .as_ref()
            .ok_or_else(|| eyre::eyre!("rules not compiled - ResolvePhase must run after RulesPhase"))?;
        let layout = Layout::from_config(&ctx.config);

        let mut plans = Vec::with_capacity(ctx.model.unit_count());
        for (ci, context) in ctx.model.bounded_contexts.iter().enumerate() {
            for (ai, aggregate) in context.aggregates.iter().enumerate() {
                let units = aggregate
                    .enums
                    .iter()
                    .enumerate()
                    .map(|(i, u)| (UnitKind::Enum, i, u.name.as_str()))
                    .chain(
                        aggregate
                            .value_objects
                            .iter()
                            .enumerate()
                            .map(|(i, u)| (UnitKind::ValueObject, i, u.name.as_str())),
                    )
                    .chain(
                        aggregate
                            .entities
                            .iter()
                            .enumerate()
                            .map(|(i, u)| (UnitKind::Entity, i, u.name.as_str())),
                    );

                for (kind, index, name) in units {
                    let unit = UnitRef {
                        name,
                        kind,
                        context: &context.name,
                        aggregate: &aggregate.name,
                    };
                    let resolved = resolve_path(&unit, &layout, rules);
                    tracing::debug!(%kind, name, path = %resolved.path, "resolved unit");

                    plans.push(UnitPlan {
                        kind,
                        name: name.to_string(),
                        context: context.name.clone(),
                        aggregate: aggregate.name.clone(),
                        context_index: ci,
                        aggregate_index: ai,
                        index,
                        resolved,
                    });
                }
            }
        }

        for plan in &plans {
            ctx.registry.register(plan.name.clone(), UnitInfo::from_plan(plan));
        }
        ctx.plans = plans;
        Ok(())
    }
}
