//! Import collection.

use std::collections::BTreeSet;

use indexmap::IndexMap;

/// Tracks `use` imports and deduplicates them.
///
/// Symbols are grouped by namespace in insertion order; [`statements`]
/// returns them sorted for deterministic output.
///
/// # Example
///
/// ```
/// use cmlgen_codegen::generation::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add("Doctrine\\Common\\Collections", "Collection");
/// imports.add("Doctrine\\Common\\Collections", "ArrayCollection");
/// imports.add_aliased("Doctrine\\ORM", "Mapping", "ORM");
///
/// assert_eq!(
///     imports.statements(),
///     vec![
///         "Doctrine\\Common\\Collections\\ArrayCollection",
///         "Doctrine\\Common\\Collections\\Collection",
///         "Doctrine\\ORM\\Mapping as ORM",
///     ]
/// );
/// ```
///
/// [`statements`]: ImportCollector::statements
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    /// Namespace -> set of symbols (sorted for deterministic output)
    imports: IndexMap<String, BTreeSet<String>>,
}

impl ImportCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symbol import from a namespace.
    pub fn add(&mut self, namespace: &str, symbol: &str) {
        self.imports
            .entry(namespace.trim_matches('\\').to_string())
            .or_default()
            .insert(symbol.to_string());
    }

    /// Add a symbol imported under an alias (`use A\B as C`).
    pub fn add_aliased(&mut self, namespace: &str, symbol: &str, alias: &str) {
        self.add(namespace, &format!("{} as {}", symbol, alias));
    }

    /// Check if a specific symbol is imported from a namespace.
    pub fn has_symbol(&self, namespace: &str, symbol: &str) -> bool {
        self.imports
            .get(namespace.trim_matches('\\'))
            .is_some_and(|symbols| symbols.contains(symbol))
    }

    /// Iterate over all imports in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.imports.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Fully qualified import targets, sorted and deduplicated.
    pub fn statements(&self) -> Vec<String> {
        let statements: BTreeSet<String> = self
            .imports
            .iter()
            .flat_map(|(namespace, symbols)| {
                symbols.iter().map(move |symbol| {
                    if namespace.is_empty() {
                        symbol.clone()
                    } else {
                        format!("{}\\{}", namespace, symbol)
                    }
                })
            })
            .collect();
        statements.into_iter().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    /// Number of namespaces.
    pub fn len(&self) -> usize {
        self.imports.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_collector_basic() {
        let mut imports = ImportCollector::new();
        imports.add("Illuminate\\Database\\Eloquent", "Model");
        imports.add("Illuminate\\Database\\Eloquent\\Relations", "HasMany");
        imports.add("Illuminate\\Database\\Eloquent\\Relations", "HasMany");

        assert!(imports.has_symbol("Illuminate\\Database\\Eloquent", "Model"));
        assert!(!imports.has_symbol("Illuminate\\Database\\Eloquent", "Builder"));
        assert_eq!(imports.len(), 2);
        assert_eq!(imports.statements().len(), 2);
    }

    #[test]
    fn test_import_collector_trims_separators() {
        let mut imports = ImportCollector::new();
        imports.add("\\App\\Models\\", "Order");
        assert_eq!(imports.statements(), vec!["App\\Models\\Order"]);
    }

    #[test]
    fn test_import_collector_aliased() {
        let mut imports = ImportCollector::new();
        imports.add("App\\Models", "Order");
        imports.add_aliased("Doctrine\\ORM", "Mapping", "ORM");

        assert!(imports.has_symbol("Doctrine\\ORM", "Mapping as ORM"));
        assert_eq!(imports.iter().count(), 2);
        assert_eq!(
            imports.statements(),
            vec!["App\\Models\\Order", "Doctrine\\ORM\\Mapping as ORM"]
        );
    }

    #[test]
    fn test_empty() {
        let imports = ImportCollector::new();
        assert!(imports.is_empty());
        assert!(imports.statements().is_empty());
    }
}
