//! Class emission shared by value objects and entities.

use std::collections::HashSet;

use cmlgen_codegen::{
    builder::{
        ClassSpec, ConstructorParam, ConstructorSpec, MethodSpec, ParamSpec, PropertySpec, Visibility,
    },
    generation::ImportCollector,
};
use cmlgen_config::Visibility as PropertyVisibility;

use super::{Emitter, Member, ReadonlyMode, References, ResolvedProperty, UnitContext};
use crate::{
    PhpClass, PhpFile,
    naming::{getter_name, setter_name},
};

fn member_visibility(visibility: PropertyVisibility) -> Visibility {
    match visibility {
        PropertyVisibility::Public => Visibility::Public,
        PropertyVisibility::Private => Visibility::Private,
    }
}

impl Emitter<'_> {
    /// Fill `class` with the unit's members and render it into a file.
    pub(super) fn emit_class(
        &self,
        unit: &UnitContext<'_>,
        mut class: ClassSpec,
        namespace: &str,
    ) -> String {
        let adapter = self.adapter;
        let mut imports = ImportCollector::new();
        let mut references = References::new(
            self.registry,
            unit.context,
            unit.aggregate,
            namespace,
            unit.name,
        );

        let properties: Vec<ResolvedProperty<'_>> = unit
            .properties
            .iter()
            .map(|property| {
                let mut resolved = references.resolve(property, &mut imports);
                resolved.php_type = adapter.map_type(unit, &resolved);
                resolved
            })
            .collect();

        if unit.readonly == ReadonlyMode::Class {
            class.is_readonly = true;
        }
        adapter.decorate_class(unit, &mut class, &mut imports);

        let visibility = member_visibility(self.config.property_visibility);
        let members: Vec<Member<'_>> = properties
            .iter()
            .filter(|p| adapter.emits_property(unit, p))
            .map(|p| {
                let mut spec =
                    PropertySpec::new(p.name(), p.php_type.as_str()).visibility(visibility);
                spec.readonly = unit.readonly == ReadonlyMode::Properties;
                adapter.decorate_property(unit, p, &mut spec, &mut imports);
                Member {
                    property: p.clone(),
                    spec,
                }
            })
            .collect();

        let constructor = adapter.build_constructor(unit, &members);
        {
            let params = constructor_params(constructor.as_ref(), |_| true);
            let promoted = constructor_params(constructor.as_ref(), |p| {
                matches!(p, ConstructorParam::Promoted(_))
            });

            for member in &members {
                let name = member.property.name();
                if promoted.contains(name) {
                    continue;
                }
                let mut spec = member.spec.clone();
                let uninitialized = !params.contains(name)
                    && adapter.initializer(unit, &member.property).is_none();
                if uninitialized && !spec.readonly && !class.is_readonly && spec.default.is_none()
                {
                    spec.default = default_value(&member.property);
                }
                class.properties.push(spec);
            }
        }
        class.constructor = constructor;

        for member in &members {
            class.methods.extend(self.accessors(unit, &member.property));
        }
        class
            .methods
            .extend(adapter.build_relation_accessors(unit, &properties, &mut imports));

        PhpFile::new(namespace)
            .imports(imports)
            .add(PhpClass(&class))
            .render()
    }

    fn accessors(
        &self,
        unit: &UnitContext<'_>,
        property: &ResolvedProperty<'_>,
    ) -> Vec<MethodSpec> {
        let mut methods = Vec::new();
        let name = property.name();
        let ty = property.php_type.as_str();

        if self.config.getters {
            methods.push(
                MethodSpec::new(getter_name(name))
                    .returns(ty)
                    .statement(format!("return $this->{};", name)),
            );
        }
        if unit.setters_enabled() {
            methods.push(
                MethodSpec::new(setter_name(name))
                    .param(ParamSpec::new(name, ty))
                    .returns("void")
                    .statement(format!("$this->{name} = ${name};")),
            );
        }
        methods
    }
}

/// Names of the constructor parameters selected by `filter`.
fn constructor_params(
    ctor: Option<&ConstructorSpec>,
    filter: impl Fn(&ConstructorParam) -> bool,
) -> HashSet<&str> {
    ctor.map(|ctor| {
        ctor.params
            .iter()
            .filter(|p| filter(p))
            .map(ConstructorParam::name)
            .collect()
    })
    .unwrap_or_default()
}

/// Initial value of a property no constructor assigns.
fn default_value(property: &ResolvedProperty<'_>) -> Option<String> {
    if property.is_nullable() && property.php_type != crate::type_mapper::MIXED {
        Some("null".to_string())
    } else if property.is_collection() && property.php_type == "array" {
        Some("[]".to_string())
    } else {
        None
    }
}
