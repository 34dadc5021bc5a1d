//! Resolved units and the name lookup table built from them.

use std::collections::HashMap;

use cmlgen_core::UnitKind;

use crate::resolver::ResolvedPath;

/// A unit scheduled for generation, in output order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitPlan {
    pub kind: UnitKind,
    /// Original (declared) unit name.
    pub name: String,
    pub context: String,
    pub aggregate: String,
    /// Index of the bounded context in the model.
    pub context_index: usize,
    /// Index of the aggregate within its context.
    pub aggregate_index: usize,
    /// Index within the aggregate's list of units of this kind.
    pub index: usize,
    pub resolved: ResolvedPath,
}

impl UnitPlan {
    /// Dotted location used in diagnostics, e.g. `Sales.Order.OrderLine`.
    pub fn location(&self) -> String {
        format!("{}.{}.{}", self.context, self.aggregate, self.name)
    }
}

/// Where a unit ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitInfo {
    pub kind: UnitKind,
    pub final_name: String,
    pub namespace: String,
    pub context: String,
    pub aggregate: String,
}

impl UnitInfo {
    pub fn from_plan(plan: &UnitPlan) -> Self {
        Self {
            kind: plan.kind,
            final_name: plan.resolved.final_name.clone(),
            namespace: plan.resolved.namespace.clone(),
            context: plan.context.clone(),
            aggregate: plan.aggregate.clone(),
        }
    }
}

/// Maps original unit names to their resolved identity.
///
/// Names are not unique across a model, so lookups prefer a unit declared in
/// the referencing aggregate, then one in the same context, then the first
/// one declared anywhere.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    units: HashMap<String, Vec<UnitInfo>>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: impl Into<String>, info: UnitInfo) {
        self.units.entry(name.into()).or_default().push(info);
    }

    /// Resolve a referenced name from inside `context`/`aggregate`.
    pub fn lookup(&self, name: &str, context: &str, aggregate: &str) -> Option<&UnitInfo> {
        let candidates = self.units.get(name)?;
        candidates
            .iter()
            .find(|u| u.context == context && u.aggregate == aggregate)
            .or_else(|| candidates.iter().find(|u| u.context == context))
            .or_else(|| candidates.first())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.units.contains_key(name)
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(kind: UnitKind, final_name: &str, ctx: &str, agg: &str) -> UnitInfo {
        UnitInfo {
            kind,
            final_name: final_name.to_string(),
            namespace: format!("App\\{}", ctx),
            context: ctx.to_string(),
            aggregate: agg.to_string(),
        }
    }

    #[test]
    fn test_lookup_prefers_nearest() {
        let mut registry = TypeRegistry::new();
        registry.register("Status", info(UnitKind::Enum, "Status", "Billing", "Invoice"));
        registry.register("Status", info(UnitKind::Enum, "Status", "Sales", "Cart"));
        registry.register("Status", info(UnitKind::Enum, "Status", "Sales", "Order"));

        let found = registry.lookup("Status", "Sales", "Order").unwrap();
        assert_eq!(found.aggregate, "Order");

        let found = registry.lookup("Status", "Sales", "Shipment").unwrap();
        assert_eq!(found.aggregate, "Cart");

        let found = registry.lookup("Status", "Hr", "Employee").unwrap();
        assert_eq!(found.context, "Billing");

        assert!(registry.lookup("Missing", "Sales", "Order").is_none());
        assert_eq!(registry.len(), 1);
    }
}
