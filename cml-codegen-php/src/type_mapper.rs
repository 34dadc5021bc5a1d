//! CML to PHP type mapping.

use cmlgen_config::Framework;

/// The PHP type used for properties without a declared type.
pub const MIXED: &str = "mixed";

/// Shape of a property, independent of its element type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypeFlags {
    pub nullable: bool,
    pub collection: bool,
    /// The property points at another entity (a relation).
    pub association: bool,
}

impl TypeFlags {
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn collection(mut self) -> Self {
        self.collection = true;
        self
    }

    pub fn association(mut self) -> Self {
        self.association = true;
        self
    }
}

/// A CML primitive and its PHP and Doctrine counterparts.
struct Primitive {
    php: &'static str,
    storage: &'static str,
}

fn primitive(raw: &str) -> Option<Primitive> {
    let (php, storage) = match raw.trim().to_lowercase().as_str() {
        "string" => ("string", "STRING"),
        "text" | "clob" => ("string", "TEXT"),
        "int" | "integer" | "short" => ("int", "INTEGER"),
        "long" => ("int", "BIGINT"),
        "boolean" | "bool" => ("bool", "BOOLEAN"),
        "float" | "double" => ("float", "FLOAT"),
        "bigdecimal" | "decimal" => ("float", "DECIMAL"),
        "date" | "localdate" => ("\\DateTimeImmutable", "DATE_IMMUTABLE"),
        "datetime" | "localdatetime" | "timestamp" | "instant" => {
            ("\\DateTimeImmutable", "DATETIME_IMMUTABLE")
        }
        "time" | "localtime" => ("\\DateTimeImmutable", "TIME_IMMUTABLE"),
        "blob" | "byte[]" => ("string", "BLOB"),
        "uuid" => ("string", "GUID"),
        _ => return None,
    };
    Some(Primitive { php, storage })
}

/// Whether `raw` names a CML primitive.
pub fn is_primitive(raw: &str) -> bool {
    primitive(raw).is_some()
}

/// The PHP type of a single (non-collection) value of `raw`.
///
/// Unknown names pass through unchanged; a blank type becomes `mixed`.
pub fn scalar_type(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return MIXED.to_string();
    }
    match primitive(raw) {
        Some(p) => p.php.to_string(),
        None => raw.to_string(),
    }
}

/// Map a CML type to the PHP type declaration of a property.
///
/// `raw` is the element type for collections. Names of generated units are
/// expected to be resolved to their final identifiers before mapping.
///
/// ```
/// use cmlgen_codegen_php::{TypeFlags, map_type};
/// use cmlgen_config::Framework;
///
/// assert_eq!(map_type("Integer", TypeFlags::default(), Framework::Plain), "int");
/// assert_eq!(map_type("String", TypeFlags::default().nullable(), Framework::Plain), "?string");
/// assert_eq!(
///     map_type("OrderLine", TypeFlags::default().collection().association(), Framework::Doctrine),
///     "Collection"
/// );
/// ```
pub fn map_type(raw: &str, flags: TypeFlags, framework: Framework) -> String {
    let base = if flags.collection {
        match framework {
            Framework::Doctrine if flags.association => "Collection".to_string(),
            _ => "array".to_string(),
        }
    } else {
        scalar_type(raw)
    };

    if flags.nullable && base != MIXED {
        format!("?{}", base)
    } else {
        base
    }
}

/// Doctrine `Types::` constant for a primitive, if it has one.
pub fn map_storage_type(raw: &str) -> Option<&'static str> {
    primitive(raw).map(|p| p.storage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitives_are_case_insensitive() {
        let flags = TypeFlags::default();
        assert_eq!(map_type("String", flags, Framework::Plain), "string");
        assert_eq!(map_type("string", flags, Framework::Plain), "string");
        assert_eq!(map_type("Integer", flags, Framework::Plain), "int");
        assert_eq!(map_type("LONG", flags, Framework::Plain), "int");
        assert_eq!(map_type("Boolean", flags, Framework::Plain), "bool");
        assert_eq!(map_type("BigDecimal", flags, Framework::Plain), "float");
        assert_eq!(map_type("byte[]", flags, Framework::Plain), "string");
        assert_eq!(
            map_type("LocalDateTime", flags, Framework::Plain),
            "\\DateTimeImmutable"
        );
    }

    #[test]
    fn test_unknown_passes_through() {
        assert_eq!(
            map_type("Money", TypeFlags::default(), Framework::Laravel),
            "Money"
        );
        assert_eq!(
            map_type("Money", TypeFlags::default().nullable(), Framework::Plain),
            "?Money"
        );
    }

    #[test]
    fn test_blank_is_mixed_and_never_nullable() {
        assert_eq!(map_type("", TypeFlags::default(), Framework::Plain), "mixed");
        assert_eq!(
            map_type("  ", TypeFlags::default().nullable(), Framework::Doctrine),
            "mixed"
        );
    }

    #[test]
    fn test_collections_per_framework() {
        let relation = TypeFlags::default().collection().association();
        let primitive = TypeFlags::default().collection();

        assert_eq!(map_type("OrderLine", relation, Framework::Plain), "array");
        assert_eq!(map_type("OrderLine", relation, Framework::Laravel), "array");
        assert_eq!(
            map_type("OrderLine", relation, Framework::Doctrine),
            "Collection"
        );
        assert_eq!(map_type("String", primitive, Framework::Doctrine), "array");
        assert_eq!(
            map_type("String", primitive.nullable(), Framework::Plain),
            "?array"
        );
    }

    #[test]
    fn test_storage_types() {
        assert_eq!(map_storage_type("String"), Some("STRING"));
        assert_eq!(map_storage_type("text"), Some("TEXT"));
        assert_eq!(map_storage_type("Long"), Some("BIGINT"));
        assert_eq!(map_storage_type("Date"), Some("DATE_IMMUTABLE"));
        assert_eq!(map_storage_type("UUID"), Some("GUID"));
        assert_eq!(map_storage_type("Money"), None);
        assert_eq!(map_storage_type(""), None);
    }

    #[test]
    fn test_is_primitive() {
        assert!(is_primitive("Double"));
        assert!(!is_primitive("OrderLine"));
    }
}
