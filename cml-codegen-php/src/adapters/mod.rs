//! Framework adapters for PHP code generation.
//!
//! Each supported framework is a [`FrameworkAdapter`] selected once per
//! generation run. The class emitter builds the parts every framework
//! shares and asks the adapter at each point where frameworks differ.

mod doctrine;
mod laravel;
mod plain;

use cmlgen_codegen::{
    builder::{ClassSpec, ConstructorSpec, MethodSpec, PropertySpec},
    generation::ImportCollector,
};
use cmlgen_config::Framework;

pub use self::{doctrine::DoctrineAdapter, laravel::LaravelAdapter, plain::PlainAdapter};
use crate::{
    emit::{Member, ResolvedProperty, UnitContext, constructor},
    type_mapper,
};

/// Framework-specific decisions of the class emitter.
pub trait FrameworkAdapter {
    fn framework(&self) -> Framework;

    /// PHP type declaration of a property.
    fn map_type(&self, _unit: &UnitContext<'_>, property: &ResolvedProperty<'_>) -> String {
        type_mapper::map_type(&property.reference, property.flags(), self.framework())
    }

    /// Class-level additions: base class, attributes, synthetic members.
    fn decorate_class(
        &self,
        _unit: &UnitContext<'_>,
        _class: &mut ClassSpec,
        _imports: &mut ImportCollector,
    ) {
    }

    /// Whether a model property becomes a PHP property with accessors.
    fn emits_property(&self, _unit: &UnitContext<'_>, _property: &ResolvedProperty<'_>) -> bool {
        true
    }

    /// Property-level annotations.
    fn decorate_property(
        &self,
        _unit: &UnitContext<'_>,
        _property: &ResolvedProperty<'_>,
        _spec: &mut PropertySpec,
        _imports: &mut ImportCollector,
    ) {
    }

    /// Whether the property may be taken as a constructor parameter.
    fn is_constructor_param(
        &self,
        _unit: &UnitContext<'_>,
        _property: &ResolvedProperty<'_>,
    ) -> bool {
        true
    }

    /// Constructor statement for a property that is not a parameter.
    fn initializer(
        &self,
        _unit: &UnitContext<'_>,
        _property: &ResolvedProperty<'_>,
    ) -> Option<String> {
        None
    }

    /// Build the constructor, or `None` when there is nothing to construct.
    fn build_constructor(
        &self,
        unit: &UnitContext<'_>,
        members: &[Member<'_>],
    ) -> Option<ConstructorSpec> {
        let ctor = constructor::build(self, unit, members);
        (!ctor.is_empty()).then_some(ctor)
    }

    /// Methods standing in for properties the adapter does not emit.
    fn build_relation_accessors(
        &self,
        _unit: &UnitContext<'_>,
        _properties: &[ResolvedProperty<'_>],
        _imports: &mut ImportCollector,
    ) -> Vec<MethodSpec> {
        Vec::new()
    }
}

/// The adapter for `framework`.
pub fn for_framework(framework: Framework) -> Box<dyn FrameworkAdapter> {
    match framework {
        Framework::Plain => Box::new(PlainAdapter::new()),
        Framework::Laravel => Box::new(LaravelAdapter::new()),
        Framework::Doctrine => Box::new(DoctrineAdapter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_framework() {
        for framework in [Framework::Plain, Framework::Laravel, Framework::Doctrine] {
            assert_eq!(for_framework(framework).framework(), framework);
        }
    }
}
