//! Shared string utilities for code generation.

/// Convert a string to PascalCase (e.g., "hello_world" -> "HelloWorld", "orderLines" -> "OrderLines")
pub fn to_pascal_case(s: &str) -> String {
    s.split(['_', '-'])
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Convert a string to camelCase (e.g., "OrderLine" -> "orderLine")
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Normalize an enumeration label into a case identifier.
///
/// The label is upper-cased and every character outside `[A-Za-z0-9_]`
/// becomes `_` (e.g., "pending-review" -> "PENDING_REVIEW").
pub fn to_case_identifier(label: &str) -> String {
    label
        .to_uppercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Check whether a string is a plain identifier (letter or underscore first,
/// then letters, digits, underscores).
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("hello"), "Hello");
        assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
        assert_eq!(to_pascal_case("orderLines"), "OrderLines");
        assert_eq!(to_pascal_case("created-at"), "CreatedAt");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("OrderLine"), "orderLine");
        assert_eq!(to_camel_case("order_line"), "orderLine");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn test_to_case_identifier() {
        assert_eq!(to_case_identifier("Active"), "ACTIVE");
        assert_eq!(to_case_identifier("pending-review"), "PENDING_REVIEW");
        assert_eq!(to_case_identifier("on hold!"), "ON_HOLD_");
        assert_eq!(to_case_identifier("v2_beta"), "V2_BETA");
        assert_eq!(to_case_identifier("café"), "CAF_");
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("App"));
        assert!(is_identifier("_internal"));
        assert!(is_identifier("Models2"));
        assert!(!is_identifier("2Models"));
        assert!(!is_identifier("Sales-Context"));
        assert!(!is_identifier(""));
    }
}
