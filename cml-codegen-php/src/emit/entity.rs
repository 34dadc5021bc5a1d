use cmlgen_codegen::{builder::ClassSpec, generation::UnitPlan};
use cmlgen_core::UnitKind;
use cmlgen_ir::Entity;

use super::{Emitter, ReadonlyMode, UnitContext};

impl Emitter<'_> {
    /// Emit an entity class. Aggregate roots are marked with a docblock.
    pub fn emit_entity(&self, entity: &Entity, plan: &UnitPlan) -> String {
        let unit = UnitContext {
            kind: UnitKind::Entity,
            name: &plan.resolved.final_name,
            context: &plan.context,
            aggregate: &plan.aggregate,
            properties: &entity.properties,
            is_aggregate_root: entity.is_aggregate_root,
            readonly: ReadonlyMode::Off,
            config: self.config,
        };

        let mut class = ClassSpec::new(unit.name);
        if entity.is_aggregate_root {
            class = class
                .doc(format!("Aggregate root of the {} aggregate.", plan.aggregate))
                .doc("")
                .doc(format!("Bounded context: {}", plan.context));
        }
        self.emit_class(&unit, class, &plan.resolved.namespace)
    }
}
