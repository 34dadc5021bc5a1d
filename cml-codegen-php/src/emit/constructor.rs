//! Constructor construction shared by all frameworks.

use cmlgen_codegen::builder::{ConstructorParam, ConstructorSpec, ParamSpec, PropertySpec};

use super::{ResolvedProperty, UnitContext};
use crate::adapters::FrameworkAdapter;

/// An emitted property: the model side and its PHP declaration.
#[derive(Debug, Clone)]
pub struct Member<'a> {
    pub property: ResolvedProperty<'a>,
    pub spec: PropertySpec,
}

/// Build a constructor following the unit's constructor policy.
///
/// Parameters keep property order. With promotion the declaration moves
/// into the parameter list; otherwise each parameter is assigned in the
/// body. Properties the adapter excludes from the parameter list get its
/// initializer instead.
pub fn build<A: FrameworkAdapter + ?Sized>(
    adapter: &A,
    unit: &UnitContext<'_>,
    members: &[Member<'_>],
) -> ConstructorSpec {
    let policy = unit.constructor_policy();
    let promote = unit.config.constructor_promotion;
    let mut ctor = ConstructorSpec::new();

    for member in members {
        let property = &member.property;
        let is_param = adapter.is_constructor_param(unit, property)
            && policy.includes(property.is_nullable());

        if !is_param {
            if let Some(init) = adapter.initializer(unit, property) {
                ctor.body.push(init);
            }
            continue;
        }

        if promote {
            let mut promoted = member.spec.clone();
            promoted.default = None;
            ctor.params.push(ConstructorParam::Promoted(promoted));
        } else {
            ctor.params.push(ConstructorParam::Plain(ParamSpec::new(
                property.name(),
                property.php_type.as_str(),
            )));
            ctor.body
                .push(format!("$this->{name} = ${name};", name = property.name()));
        }
    }

    ctor
}
