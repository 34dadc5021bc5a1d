use cmlgen_codegen::{builder::ClassSpec, generation::UnitPlan};
use cmlgen_core::UnitKind;
use cmlgen_ir::ValueObject;

use super::{Emitter, ReadonlyMode, UnitContext};

impl Emitter<'_> {
    /// Emit a `final` value object class, readonly when requested and
    /// supported by the target PHP version.
    pub fn emit_value_object(&self, value_object: &ValueObject, plan: &UnitPlan) -> String {
        let unit = UnitContext {
            kind: UnitKind::ValueObject,
            name: &plan.resolved.final_name,
            context: &plan.context,
            aggregate: &plan.aggregate,
            properties: &value_object.properties,
            is_aggregate_root: false,
            readonly: ReadonlyMode::for_value_object(self.config),
            config: self.config,
        };
        let class = ClassSpec::new(unit.name).final_();
        self.emit_class(&unit, class, &plan.resolved.namespace)
    }
}
