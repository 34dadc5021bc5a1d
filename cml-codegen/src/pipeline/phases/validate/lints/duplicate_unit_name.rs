//! Lint for names declared twice inside one aggregate.

use std::collections::HashMap;

use cmlgen_core::UnitKind;

use super::super::Lint;
use crate::pipeline::{CompilationContext, Diagnostic};

/// Lint that warns about unit names declared more than once in an aggregate,
/// regardless of kind.
pub struct DuplicateUnitNameLint;

impl Lint for DuplicateUnitNameLint {
    fn name(&self) -> &'static str {
        "duplicate-unit-name"
    }

    fn description(&self) -> &'static str {
        "Detect unit names declared twice within one aggregate"
    }

    fn check(&self, ctx: &CompilationContext, diagnostics: &mut Vec<Diagnostic>) {
        for (context, aggregate) in ctx.model.aggregates() {
            let mut seen: HashMap<&str, UnitKind> = HashMap::new();

            let units = aggregate
                .enums
                .iter()
                .map(|u| (u.name.as_str(), UnitKind::Enum))
                .chain(
                    aggregate
                        .value_objects
                        .iter()
                        .map(|u| (u.name.as_str(), UnitKind::ValueObject)),
                )
                .chain(
                    aggregate
                        .entities
                        .iter()
                        .map(|u| (u.name.as_str(), UnitKind::Entity)),
                );

            for (name, kind) in units {
                if let Some(first) = seen.get(name) {
                    diagnostics.push(
                        Diagnostic::warning(
                            "validate",
                            format!(
                                "{} '{}' is declared more than once in aggregate '{}' (first as {})",
                                kind, name, aggregate.name, first
                            ),
                        )
                        .at(format!("{}.{}.{}", context.name, aggregate.name, name)),
                    );
                } else {
                    seen.insert(name, kind);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use cmlgen_config::GeneratorConfig;
    use cmlgen_ir::{Aggregate, BoundedContext, Entity, Model, ValueObject};

    use super::*;

    fn context_for(aggregate: Aggregate) -> CompilationContext {
        let mut sales = BoundedContext::new("Sales");
        sales.aggregates.push(aggregate);
        CompilationContext::new(
            Model {
                bounded_contexts: vec![sales],
            },
            GeneratorConfig::default(),
        )
    }

    #[test]
    fn test_duplicate_across_kinds() {
        let mut agg = Aggregate::new("Order");
        agg.value_objects.push(ValueObject::new("Address"));
        agg.entities.push(Entity::new("Address"));

        let mut diagnostics = Vec::new();
        DuplicateUnitNameLint.check(&context_for(agg), &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("first as valueobject"));
        assert_eq!(diagnostics[0].location.as_deref(), Some("Sales.Order.Address"));
    }

    #[test]
    fn test_same_name_in_other_aggregate_is_fine() {
        let mut order = Aggregate::new("Order");
        order.entities.push(Entity::new("Note"));
        let mut invoice = Aggregate::new("Invoice");
        invoice.entities.push(Entity::new("Note"));

        let mut ctx = context_for(order);
        ctx.model.bounded_contexts[0].aggregates.push(invoice);

        let mut diagnostics = Vec::new();
        DuplicateUnitNameLint.check(&ctx, &mut diagnostics);
        assert!(diagnostics.is_empty());
    }
}
