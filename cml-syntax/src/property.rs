//! Property declaration parsing.

use std::sync::LazyLock;

use cmlgen_ir::Property;
use regex::Regex;

/// Bare line that flags the enclosing entity as its aggregate's root.
pub const AGGREGATE_ROOT_MARKER: &str = "aggregateRoot";

static COLLECTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:Set|List)\s*<\s*([^>]*?)\s*>").expect("collection pattern is valid")
});

/// Parse a single property declaration such as `- Set<OrderLine> lines`.
///
/// Returns `None` for lines that do not declare a property.
pub fn parse_property(line: &str) -> Option<Property> {
    let line = match line.find("//") {
        Some(idx) => &line[..idx],
        None => line,
    };
    let line = line.trim();

    if line.is_empty() || line == "{" || line == "}" || line == AGGREGATE_ROOT_MARKER {
        return None;
    }

    let (is_relation, line) = match line.strip_prefix('-') {
        Some(rest) => (true, rest.trim_start()),
        None => (false, line),
    };

    let is_enum = line.contains('^');
    let line = line.replace('^', "");

    // The wrapper becomes a single token so the name stays in second position.
    let (element_type, line) = match COLLECTION.captures(&line) {
        Some(caps) => {
            let element = caps.get(1).map_or("", |m| m.as_str()).to_string();
            let collapsed = COLLECTION.replace(&line, "Collection").into_owned();
            (Some(element), collapsed)
        }
        None => (None, line),
    };

    let mut nullable = false;
    let mut tokens = Vec::new();
    for token in line.split_whitespace() {
        if token.trim_end_matches([';', ',']) == "nullable" {
            nullable = true;
        } else {
            tokens.push(token);
        }
    }

    if tokens.len() < 2 {
        return None;
    }

    let is_collection = element_type.is_some();
    let ty = element_type.unwrap_or_else(|| tokens[0].trim_start_matches('@').to_string());
    let name = tokens[1].trim_end_matches([';', ',']).to_string();

    Some(Property {
        name,
        ty,
        nullable,
        is_relation,
        is_collection,
        is_enum,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_property() {
        let prop = parse_property("String customerName").unwrap();
        assert_eq!(prop, Property::new("customerName", "String"));
    }

    #[test]
    fn test_relation_collection() {
        let prop = parse_property("- Set<OrderLine> lines").unwrap();
        assert_eq!(prop.name, "lines");
        assert_eq!(prop.ty, "OrderLine");
        assert!(prop.is_relation);
        assert!(prop.is_collection);
        assert!(!prop.nullable);
    }

    #[test]
    fn test_list_with_spaces() {
        let prop = parse_property("List< String > tags").unwrap();
        assert_eq!(prop.ty, "String");
        assert_eq!(prop.name, "tags");
        assert!(prop.is_collection);
        assert!(!prop.is_relation);
    }

    #[test]
    fn test_nullable_anywhere() {
        let a = parse_property("nullable String nickname").unwrap();
        let b = parse_property("String nickname nullable").unwrap();
        assert!(a.nullable && b.nullable);
        assert_eq!(a.ty, "String");
        assert_eq!(b.name, "nickname");
    }

    #[test]
    fn test_nullable_with_trailing_punctuation() {
        let a = parse_property("String nickname nullable;").unwrap();
        assert!(a.nullable);
        assert_eq!(a.name, "nickname");
        assert_eq!(a.ty, "String");

        let b = parse_property("nullable String nickname,").unwrap();
        assert!(b.nullable);
        assert_eq!(b.name, "nickname");
        assert_eq!(b.ty, "String");
    }

    #[test]
    fn test_enum_reference() {
        let prop = parse_property("^Status status").unwrap();
        assert_eq!(prop.ty, "Status");
        assert!(prop.is_enum);
    }

    #[test]
    fn test_enum_collection() {
        let prop = parse_property("List<^Tag> tags").unwrap();
        assert_eq!(prop.ty, "Tag");
        assert!(prop.is_enum);
        assert!(prop.is_collection);
    }

    #[test]
    fn test_strips_trailing_punctuation_and_comment() {
        let prop = parse_property("int quantity; // amount").unwrap();
        assert_eq!(prop.name, "quantity");
        assert_eq!(prop.ty, "int");
    }

    #[test]
    fn test_strips_leading_at() {
        let prop = parse_property("- @Customer customer").unwrap();
        assert_eq!(prop.ty, "Customer");
        assert!(prop.is_relation);
        assert!(!prop.is_collection);
    }

    #[test]
    fn test_non_properties() {
        assert!(parse_property("").is_none());
        assert!(parse_property("{").is_none());
        assert!(parse_property("}").is_none());
        assert!(parse_property(AGGREGATE_ROOT_MARKER).is_none());
        assert!(parse_property("String").is_none());
        assert!(parse_property("nullable String").is_none());
        assert!(parse_property("// only a comment").is_none());
    }
}
