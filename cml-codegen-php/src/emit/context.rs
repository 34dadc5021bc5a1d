//! Per-unit emission context shared with framework adapters.

use std::collections::HashMap;

use cmlgen_codegen::generation::{ImportCollector, TypeRegistry};
use cmlgen_config::{ConstructorType, GeneratorConfig};
use cmlgen_core::UnitKind;
use cmlgen_ir::Property;

use crate::type_mapper::{TypeFlags, is_primitive};

/// How readonly is expressed for a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadonlyMode {
    Off,
    /// Every property carries `readonly` (PHP 8.1).
    Properties,
    /// The class is declared `readonly` (PHP 8.2+).
    Class,
}

impl ReadonlyMode {
    /// Readonly mode of a value object under `config`.
    pub fn for_value_object(config: &GeneratorConfig) -> Self {
        if !config.readonly_value_objects_active() {
            ReadonlyMode::Off
        } else if config.php_version.supports_readonly_classes() {
            ReadonlyMode::Class
        } else {
            ReadonlyMode::Properties
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, ReadonlyMode::Off)
    }
}

/// The class being generated.
#[derive(Debug, Clone, Copy)]
pub struct UnitContext<'a> {
    pub kind: UnitKind,
    /// Final (possibly renamed) class name.
    pub name: &'a str,
    pub context: &'a str,
    pub aggregate: &'a str,
    pub properties: &'a [Property],
    pub is_aggregate_root: bool,
    pub readonly: ReadonlyMode,
    pub config: &'a GeneratorConfig,
}

impl UnitContext<'_> {
    pub fn is_entity(&self) -> bool {
        self.kind == UnitKind::Entity
    }

    /// Whether the model declares a property called `name`.
    pub fn declares(&self, name: &str) -> bool {
        self.properties.iter().any(|p| p.name == name)
    }

    /// Constructor policy in effect; readonly classes take every property.
    pub fn constructor_policy(&self) -> ConstructorType {
        if self.readonly.is_active() {
            ConstructorType::All
        } else {
            self.config.constructor
        }
    }

    pub fn setters_enabled(&self) -> bool {
        self.config.setters && !self.readonly.is_active()
    }
}

/// A property with its type resolved against the generated units.
#[derive(Debug, Clone)]
pub struct ResolvedProperty<'a> {
    pub property: &'a Property,
    /// Name to write for the (element) type: a primitive as declared, the
    /// final name of a generated unit, or an unknown name unchanged.
    pub reference: String,
    /// Kind of the generated unit the type refers to.
    pub target: Option<UnitKind>,
    /// Points at an entity, either marked as a relation or by type.
    pub association: bool,
    /// PHP type declaration, filled in by the framework adapter.
    pub php_type: String,
}

impl<'a> ResolvedProperty<'a> {
    pub fn new(property: &'a Property, reference: String, target: Option<UnitKind>) -> Self {
        let association = property.is_relation || target == Some(UnitKind::Entity);
        Self {
            property,
            reference,
            target,
            association,
            php_type: String::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.property.name
    }

    pub fn is_collection(&self) -> bool {
        self.property.is_collection
    }

    pub fn is_nullable(&self) -> bool {
        self.property.nullable
    }

    /// Refers to an enumeration, by marker or by resolved type.
    pub fn is_enum(&self) -> bool {
        self.property.is_enum || self.target == Some(UnitKind::Enum)
    }

    pub fn is_value_object(&self) -> bool {
        self.target == Some(UnitKind::ValueObject)
    }

    pub fn flags(&self) -> TypeFlags {
        TypeFlags {
            nullable: self.property.nullable,
            collection: self.property.is_collection,
            association: self.association,
        }
    }
}

/// Resolves referenced unit names and records the imports they need.
pub struct References<'a> {
    registry: &'a TypeRegistry,
    context: &'a str,
    aggregate: &'a str,
    namespace: &'a str,
    class_name: &'a str,
    /// Short name -> namespace it was imported from.
    imported: HashMap<String, String>,
}

impl<'a> References<'a> {
    pub fn new(
        registry: &'a TypeRegistry,
        context: &'a str,
        aggregate: &'a str,
        namespace: &'a str,
        class_name: &'a str,
    ) -> Self {
        Self {
            registry,
            context,
            aggregate,
            namespace,
            class_name,
            imported: HashMap::new(),
        }
    }

    /// Resolve a property's type, importing the target unit when it lives
    /// in another namespace.
    pub fn resolve<'p>(
        &mut self,
        property: &'p Property,
        imports: &mut ImportCollector,
    ) -> ResolvedProperty<'p> {
        let raw = property.ty.trim();
        if raw.is_empty() || is_primitive(raw) {
            return ResolvedProperty::new(property, raw.to_string(), None);
        }
        let Some(info) = self.registry.lookup(raw, self.context, self.aggregate) else {
            return ResolvedProperty::new(property, raw.to_string(), None);
        };

        let reference = if info.namespace == self.namespace {
            info.final_name.clone()
        } else if info.namespace.is_empty() || self.clashes(&info.final_name, &info.namespace) {
            qualified(&info.namespace, &info.final_name)
        } else {
            imports.add(&info.namespace, &info.final_name);
            self.imported
                .insert(info.final_name.clone(), info.namespace.clone());
            info.final_name.clone()
        };

        ResolvedProperty::new(property, reference, Some(info.kind))
    }

    /// A short name that would shadow the class itself or another import.
    fn clashes(&self, name: &str, namespace: &str) -> bool {
        name == self.class_name
            || self
                .imported
                .get(name)
                .is_some_and(|existing| existing != namespace)
    }
}

/// Fully qualified name with a leading separator.
fn qualified(namespace: &str, name: &str) -> String {
    if namespace.is_empty() {
        format!("\\{}", name)
    } else {
        format!("\\{}\\{}", namespace, name)
    }
}

#[cfg(test)]
mod tests {
    use cmlgen_codegen::generation::UnitInfo;
    use cmlgen_config::PhpVersion;

    use super::*;

    fn unit(kind: UnitKind, name: &str, namespace: &str) -> UnitInfo {
        UnitInfo {
            kind,
            final_name: name.to_string(),
            namespace: namespace.to_string(),
            context: "Sales".to_string(),
            aggregate: "Order".to_string(),
        }
    }

    #[test]
    fn test_readonly_mode() {
        let mut config = GeneratorConfig {
            readonly_value_objects: true,
            ..GeneratorConfig::default()
        };
        assert_eq!(ReadonlyMode::for_value_object(&config), ReadonlyMode::Class);

        config.php_version = PhpVersion::Php81;
        assert_eq!(
            ReadonlyMode::for_value_object(&config),
            ReadonlyMode::Properties
        );

        config.php_version = PhpVersion::Php80;
        assert_eq!(ReadonlyMode::for_value_object(&config), ReadonlyMode::Off);
    }

    #[test]
    fn test_resolve_same_namespace() {
        let mut registry = TypeRegistry::new();
        registry.register("Money", unit(UnitKind::ValueObject, "Money", "App"));

        let mut refs = References::new(&registry, "Sales", "Order", "App", "Order");
        let mut imports = ImportCollector::new();
        let property = Property::new("total", "Money");
        let resolved = refs.resolve(&property, &mut imports);

        assert_eq!(resolved.reference, "Money");
        assert!(resolved.is_value_object());
        assert!(!resolved.association);
        assert!(imports.is_empty());
    }

    #[test]
    fn test_resolve_imports_other_namespace() {
        let mut registry = TypeRegistry::new();
        registry.register(
            "CustomerEntity",
            unit(UnitKind::Entity, "Customer", "App\\Crm"),
        );

        let mut refs = References::new(&registry, "Sales", "Order", "App\\Sales", "Order");
        let mut imports = ImportCollector::new();
        let property = Property::new("customer", "CustomerEntity");
        let resolved = refs.resolve(&property, &mut imports);

        assert_eq!(resolved.reference, "Customer");
        assert!(resolved.association);
        assert_eq!(imports.statements(), vec!["App\\Crm\\Customer"]);
    }

    #[test]
    fn test_resolve_qualifies_clashing_names() {
        let mut registry = TypeRegistry::new();
        registry.register("Order", unit(UnitKind::Entity, "Order", "App\\Legacy"));

        let mut refs = References::new(&registry, "Sales", "Order", "App\\Sales", "Order");
        let mut imports = ImportCollector::new();
        let property = Property::new("previous", "Order");
        let resolved = refs.resolve(&property, &mut imports);

        assert_eq!(resolved.reference, "\\App\\Legacy\\Order");
        assert!(imports.is_empty());
    }

    #[test]
    fn test_resolve_primitive_and_unknown() {
        let registry = TypeRegistry::new();
        let mut refs = References::new(&registry, "Sales", "Order", "App", "Order");
        let mut imports = ImportCollector::new();

        let code = Property::new("code", "String");
        assert_eq!(refs.resolve(&code, &mut imports).reference, "String");

        let unknown = Property::new("thing", "Gadget").relation();
        let resolved = refs.resolve(&unknown, &mut imports);
        assert_eq!(resolved.reference, "Gadget");
        assert!(resolved.association);
        assert_eq!(resolved.target, None);
    }
}
