//! Laravel (Eloquent) adapter.

use cmlgen_codegen::{
    builder::{ClassSpec, ConstructorSpec, MethodSpec},
    generation::ImportCollector,
};
use cmlgen_config::Framework;

use super::FrameworkAdapter;
use crate::emit::{Member, ResolvedProperty, UnitContext, constructor};

const ELOQUENT_NAMESPACE: &str = "Illuminate\\Database\\Eloquent";
const RELATIONS_NAMESPACE: &str = "Illuminate\\Database\\Eloquent\\Relations";

/// Adapter for Eloquent models.
///
/// Entities extend `Model`. Properties pointing at entities become relation
/// methods (`HasMany` for collections, `BelongsTo` otherwise) instead of
/// declared properties.
#[derive(Debug, Clone, Default)]
pub struct LaravelAdapter;

impl LaravelAdapter {
    pub fn new() -> Self {
        Self
    }

    fn is_relation(unit: &UnitContext<'_>, property: &ResolvedProperty<'_>) -> bool {
        unit.is_entity() && property.association
    }
}

impl FrameworkAdapter for LaravelAdapter {
    fn framework(&self) -> Framework {
        Framework::Laravel
    }

    fn decorate_class(
        &self,
        unit: &UnitContext<'_>,
        class: &mut ClassSpec,
        imports: &mut ImportCollector,
    ) {
        if unit.is_entity() {
            imports.add(ELOQUENT_NAMESPACE, "Model");
            class.extends = Some("Model".to_string());
        }
    }

    fn emits_property(&self, unit: &UnitContext<'_>, property: &ResolvedProperty<'_>) -> bool {
        !Self::is_relation(unit, property)
    }

    fn build_constructor(
        &self,
        unit: &UnitContext<'_>,
        members: &[Member<'_>],
    ) -> Option<ConstructorSpec> {
        let mut ctor = constructor::build(self, unit, members);
        if ctor.is_empty() {
            return None;
        }
        if unit.is_entity() {
            ctor.body.insert(0, "parent::__construct();".to_string());
        }
        Some(ctor)
    }

    fn build_relation_accessors(
        &self,
        unit: &UnitContext<'_>,
        properties: &[ResolvedProperty<'_>],
        imports: &mut ImportCollector,
    ) -> Vec<MethodSpec> {
        properties
            .iter()
            .filter(|p| Self::is_relation(unit, p))
            .map(|p| {
                let (relation, call) = if p.is_collection() {
                    ("HasMany", "hasMany")
                } else {
                    ("BelongsTo", "belongsTo")
                };
                imports.add(RELATIONS_NAMESPACE, relation);
                MethodSpec::new(p.name())
                    .returns(relation)
                    .statement(format!("return $this->{}({}::class);", call, p.reference))
            })
            .collect()
    }
}
