//! Doctrine ORM adapter.

use cmlgen_codegen::{
    builder::{ClassSpec, MethodSpec, PropertySpec, Visibility},
    generation::ImportCollector,
};
use cmlgen_config::Framework;
use cmlgen_core::to_camel_case;

use super::FrameworkAdapter;
use crate::{
    emit::{ResolvedProperty, UnitContext},
    type_mapper::{self, map_storage_type, scalar_type},
};

const ORM_NAMESPACE: &str = "Doctrine\\ORM";
const TYPES_NAMESPACE: &str = "Doctrine\\DBAL\\Types";
const COLLECTIONS_NAMESPACE: &str = "Doctrine\\Common\\Collections";

/// How a property is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mapping {
    OneToMany,
    ManyToOne,
    Embedded,
    EnumColumn,
    /// Primitive collection stored as JSON.
    Json,
    /// Column with an optional `Types::` constant.
    Column(Option<&'static str>),
    /// Nothing Doctrine can map (entity reference inside an embeddable).
    Unmapped,
}

/// Adapter for Doctrine ORM entities and embeddables.
///
/// Mapping attributes are controlled by `[doctrine] attributes`; the
/// collection types, initializers and `@var` docblocks do not depend on it.
#[derive(Debug, Clone, Default)]
pub struct DoctrineAdapter;

impl DoctrineAdapter {
    pub fn new() -> Self {
        Self
    }

    fn mapping(unit: &UnitContext<'_>, property: &ResolvedProperty<'_>) -> Mapping {
        if property.is_collection() {
            return if property.association && unit.is_entity() {
                Mapping::OneToMany
            } else {
                Mapping::Json
            };
        }
        if property.association {
            return if unit.is_entity() {
                Mapping::ManyToOne
            } else {
                Mapping::Unmapped
            };
        }
        if property.is_enum() {
            Mapping::EnumColumn
        } else if property.is_value_object() {
            Mapping::Embedded
        } else {
            Mapping::Column(map_storage_type(&property.reference))
        }
    }

    /// Collections of an entity are initialized in its constructor.
    fn initialized_in_constructor(unit: &UnitContext<'_>, property: &ResolvedProperty<'_>) -> bool {
        unit.is_entity() && property.is_collection()
    }

    /// Only entity relations become a `Collection`; embeddables store arrays.
    fn uses_collection_type(unit: &UnitContext<'_>, property: &ResolvedProperty<'_>) -> bool {
        unit.is_entity() && property.is_collection() && property.association
    }

    fn attribute(
        unit: &UnitContext<'_>,
        property: &ResolvedProperty<'_>,
        imports: &mut ImportCollector,
    ) -> Option<String> {
        let target = &property.reference;
        let mut args = Vec::new();

        let name = match Self::mapping(unit, property) {
            Mapping::OneToMany => {
                args.push(format!("targetEntity: {}::class", target));
                args.push(format!("mappedBy: '{}'", to_camel_case(unit.name)));
                "OneToMany"
            }
            Mapping::ManyToOne => {
                args.push(format!("targetEntity: {}::class", target));
                "ManyToOne"
            }
            Mapping::Embedded => {
                args.push(format!("class: {}::class", target));
                "Embedded"
            }
            Mapping::EnumColumn => {
                args.push(format!("enumType: {}::class", target));
                "Column"
            }
            Mapping::Json => {
                imports.add(TYPES_NAMESPACE, "Types");
                args.push("type: Types::JSON".to_string());
                "Column"
            }
            Mapping::Column(storage) => {
                if let Some(storage) = storage {
                    imports.add(TYPES_NAMESPACE, "Types");
                    args.push(format!("type: Types::{}", storage));
                }
                "Column"
            }
            Mapping::Unmapped => return None,
        };

        if name == "Column" && property.is_nullable() {
            args.push("nullable: true".to_string());
        }

        Some(if args.is_empty() {
            format!("#[ORM\\{}]", name)
        } else {
            format!("#[ORM\\{}({})]", name, args.join(", "))
        })
    }

    fn add_id(unit: &UnitContext<'_>, class: &mut ClassSpec) {
        class.properties.insert(
            0,
            PropertySpec::new("id", "?int")
                .visibility(Visibility::Private)
                .default_value("null")
                .attribute("#[ORM\\Id]")
                .attribute("#[ORM\\GeneratedValue]")
                .attribute("#[ORM\\Column]"),
        );
        if unit.config.getters {
            class.methods.insert(
                0,
                MethodSpec::new("getId")
                    .returns("?int")
                    .statement("return $this->id;"),
            );
        }
    }
}

impl FrameworkAdapter for DoctrineAdapter {
    fn framework(&self) -> Framework {
        Framework::Doctrine
    }

    fn map_type(&self, unit: &UnitContext<'_>, property: &ResolvedProperty<'_>) -> String {
        let mut flags = property.flags();
        flags.association = Self::uses_collection_type(unit, property);
        type_mapper::map_type(&property.reference, flags, self.framework())
    }

    fn decorate_class(
        &self,
        unit: &UnitContext<'_>,
        class: &mut ClassSpec,
        imports: &mut ImportCollector,
    ) {
        if !unit.config.doctrine.attributes {
            return;
        }
        imports.add_aliased(ORM_NAMESPACE, "Mapping", "ORM");
        if unit.is_entity() {
            class.attributes.push("#[ORM\\Entity]".to_string());
            if !unit.declares("id") {
                Self::add_id(unit, class);
            }
        } else {
            class.attributes.push("#[ORM\\Embeddable]".to_string());
        }
    }

    fn decorate_property(
        &self,
        unit: &UnitContext<'_>,
        property: &ResolvedProperty<'_>,
        spec: &mut PropertySpec,
        imports: &mut ImportCollector,
    ) {
        let options = &unit.config.doctrine;

        if Self::uses_collection_type(unit, property) {
            imports.add(COLLECTIONS_NAMESPACE, "Collection");
            if Self::initialized_in_constructor(unit, property) {
                imports.add(COLLECTIONS_NAMESPACE, "ArrayCollection");
            }
            if options.collection_docblocks {
                spec.doc
                    .push(format!("@var Collection<int, {}>", property.reference));
            }
        } else if property.is_collection() && options.array_docblocks {
            spec.doc.push(format!(
                "@var array<int, {}>",
                scalar_type(&property.reference)
            ));
        }

        if !options.attributes {
            return;
        }
        if let Some(attribute) = Self::attribute(unit, property, imports) {
            spec.attributes.push(attribute);
        }
    }

    fn is_constructor_param(&self, unit: &UnitContext<'_>, property: &ResolvedProperty<'_>) -> bool {
        !Self::initialized_in_constructor(unit, property)
    }

    fn initializer(&self, unit: &UnitContext<'_>, property: &ResolvedProperty<'_>) -> Option<String> {
        if !Self::initialized_in_constructor(unit, property) {
            return None;
        }
        let value = if Self::uses_collection_type(unit, property) {
            "new ArrayCollection()"
        } else {
            "[]"
        };
        Some(format!("$this->{} = {};", property.name(), value))
    }
}
