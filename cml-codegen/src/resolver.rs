//! Output path, namespace and identifier resolution.
//!
//! Placement is driven by the directory structure, the optional type folder,
//! and an ordered list of path rules where the first match wins.

use cmlgen_config::{DirectoryStructure, GeneratorConfig, PathRule};
use cmlgen_core::UnitKind;
use regex::Regex;

use crate::{paths::php, pipeline::Diagnostic};

/// Where a unit is written and how it is named.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    /// Identifier after any strip rule.
    pub final_name: String,
    /// Relative output path, `/`-separated, with extension.
    pub path: String,
    pub namespace: String,
}

/// Layout settings shared by every unit of one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub structure: DirectoryStructure,
    pub group_by_type: bool,
    /// Namespace prefix without surrounding separators.
    pub namespace: String,
}

impl Layout {
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self {
            structure: config.directory_structure,
            group_by_type: config.group_by_type,
            namespace: config.namespace_prefix().to_string(),
        }
    }
}

/// A unit to place.
#[derive(Debug, Clone, Copy)]
pub struct UnitRef<'a> {
    pub name: &'a str,
    pub kind: UnitKind,
    pub context: &'a str,
    pub aggregate: &'a str,
}

/// A path rule with its patterns compiled.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    pattern: Regex,
    kind: Option<UnitKind>,
    subfolder: Vec<String>,
    strip: Option<Regex>,
}

impl CompiledRule {
    pub fn matches(&self, unit: &UnitRef<'_>) -> bool {
        self.kind.is_none_or(|kind| kind == unit.kind) && self.pattern.is_match(unit.name)
    }

    /// Remove the first strip match from `name`; an empty result keeps `name`.
    pub fn final_name(&self, name: &str) -> String {
        let Some(strip) = &self.strip else {
            return name.to_string();
        };
        let stripped = strip.replace(name, "");
        if stripped.is_empty() {
            name.to_string()
        } else {
            stripped.into_owned()
        }
    }

    pub fn subfolder(&self) -> &[String] {
        &self.subfolder
    }
}

/// Compile path rules in order.
///
/// A rule whose pattern fails to compile is dropped; a rule whose strip
/// pattern fails keeps routing but never renames. Each failure yields one
/// warning diagnostic.
pub fn compile_rules(rules: &[PathRule]) -> (Vec<CompiledRule>, Vec<Diagnostic>) {
    let mut compiled = Vec::with_capacity(rules.len());
    let mut warnings = Vec::new();

    for (index, rule) in rules.iter().enumerate() {
        let location = format!("path_rules[{}]", index);

        let pattern = match Regex::new(&rule.pattern) {
            Ok(pattern) => pattern,
            Err(err) => {
                tracing::warn!(rule = index, pattern = %rule.pattern, "invalid path rule pattern, rule skipped");
                warnings.push(
                    Diagnostic::warning(
                        "rules",
                        format!(
                            "invalid pattern '{}', rule skipped: {}",
                            rule.pattern,
                            first_line(&err.to_string())
                        ),
                    )
                    .at(location),
                );
                continue;
            }
        };

        let strip = match rule.strip.as_deref().map(Regex::new).transpose() {
            Ok(strip) => strip,
            Err(err) => {
                tracing::warn!(rule = index, strip = ?rule.strip, "invalid strip pattern, names kept");
                warnings.push(
                    Diagnostic::warning(
                        "rules",
                        format!(
                            "invalid strip pattern '{}', names are kept: {}",
                            rule.strip.as_deref().unwrap_or_default(),
                            first_line(&err.to_string())
                        ),
                    )
                    .at(location),
                );
                None
            }
        };

        compiled.push(CompiledRule {
            pattern,
            kind: rule.kind,
            subfolder: rule.subfolder_segments().map(str::to_string).collect(),
            strip,
        });
    }

    (compiled, warnings)
}

fn first_line(message: &str) -> &str {
    message
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .unwrap_or(message)
}

/// Resolve the output location of one unit.
pub fn resolve_path(unit: &UnitRef<'_>, layout: &Layout, rules: &[CompiledRule]) -> ResolvedPath {
    let mut dirs: Vec<String> = match layout.structure {
        DirectoryStructure::Flat => Vec::new(),
        DirectoryStructure::ByContext => vec![unit.context.to_string()],
        DirectoryStructure::ByAggregate | DirectoryStructure::Psr4 => {
            vec![unit.context.to_string(), unit.aggregate.to_string()]
        }
    };

    if layout.group_by_type {
        dirs.push(unit.kind.folder_name().to_string());
    }

    let mut final_name = unit.name.to_string();
    if let Some(rule) = rules.iter().find(|rule| rule.matches(unit)) {
        dirs.extend(rule.subfolder().iter().cloned());
        final_name = rule.final_name(unit.name);
    }

    dirs.retain(|segment| !segment.is_empty());

    let file = format!("{}.{}", final_name, php::FILE_EXTENSION);
    let path = dirs
        .iter()
        .map(String::as_str)
        .chain(std::iter::once(file.as_str()))
        .collect::<Vec<_>>()
        .join(php::PATH_SEPARATOR);

    let namespace = match layout.structure {
        DirectoryStructure::Psr4 => std::iter::once(layout.namespace.as_str())
            .chain(dirs.iter().map(String::as_str))
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(php::NAMESPACE_SEPARATOR),
        _ => layout.namespace.clone(),
    };

    ResolvedPath {
        final_name,
        path,
        namespace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(structure: DirectoryStructure, group_by_type: bool) -> Layout {
        Layout {
            structure,
            group_by_type,
            namespace: "App\\Models".to_string(),
        }
    }

    fn unit(name: &str, kind: UnitKind) -> UnitRef<'_> {
        UnitRef {
            name,
            kind,
            context: "Sales",
            aggregate: "Order",
        }
    }

    fn compile(rules: &[PathRule]) -> Vec<CompiledRule> {
        let (compiled, warnings) = compile_rules(rules);
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
        compiled
    }

    #[test]
    fn test_base_segments() {
        let u = unit("OrderLine", UnitKind::Entity);
        let cases = [
            (DirectoryStructure::Flat, "OrderLine.php"),
            (DirectoryStructure::ByContext, "Sales/OrderLine.php"),
            (DirectoryStructure::ByAggregate, "Sales/Order/OrderLine.php"),
            (DirectoryStructure::Psr4, "Sales/Order/OrderLine.php"),
        ];
        for (structure, expected) in cases {
            let resolved = resolve_path(&u, &layout(structure, false), &[]);
            assert_eq!(resolved.path, expected, "{structure}");
            assert_eq!(resolved.final_name, "OrderLine");
        }
    }

    #[test]
    fn test_namespace_only_follows_directories_for_psr4() {
        let u = unit("Money", UnitKind::ValueObject);
        let by_agg = resolve_path(&u, &layout(DirectoryStructure::ByAggregate, true), &[]);
        assert_eq!(by_agg.namespace, "App\\Models");

        let psr4 = resolve_path(&u, &layout(DirectoryStructure::Psr4, true), &[]);
        assert_eq!(psr4.path, "Sales/Order/ValueObject/Money.php");
        assert_eq!(psr4.namespace, "App\\Models\\Sales\\Order\\ValueObject");
    }

    #[test]
    fn test_psr4_with_empty_prefix() {
        let mut l = layout(DirectoryStructure::Psr4, false);
        l.namespace.clear();
        let resolved = resolve_path(&unit("Order", UnitKind::Entity), &l, &[]);
        assert_eq!(resolved.namespace, "Sales\\Order");
    }

    #[test]
    fn test_rule_with_strip() {
        // a rule routing names ending in "Event" into an Events folder
        let rules = compile(&[PathRule::new("Event$", "Events").strip("Event$")]);
        let resolved = resolve_path(
            &unit("OrderPlacedEvent", UnitKind::Entity),
            &layout(DirectoryStructure::Flat, false),
            &rules,
        );
        assert_eq!(resolved.final_name, "OrderPlaced");
        assert_eq!(resolved.path, "Events/OrderPlaced.php");
    }

    #[test]
    fn test_empty_pattern_matches_every_unit() {
        let rules = compile(&[PathRule::new("", "All")]);
        let resolved = resolve_path(
            &unit("Money", UnitKind::ValueObject),
            &layout(DirectoryStructure::Flat, false),
            &rules,
        );
        assert_eq!(resolved.path, "All/Money.php");
    }

    #[test]
    fn test_rule_after_type_folder_with_nested_subfolder() {
        let rules = compile(&[PathRule::new("^Order", "Core/Orders")]);
        let resolved = resolve_path(
            &unit("OrderLine", UnitKind::Entity),
            &layout(DirectoryStructure::Psr4, true),
            &rules,
        );
        assert_eq!(resolved.path, "Sales/Order/Entity/Core/Orders/OrderLine.php");
        assert_eq!(
            resolved.namespace,
            "App\\Models\\Sales\\Order\\Entity\\Core\\Orders"
        );
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let rules = compile(&[
            PathRule::new("Line$", "Lines"),
            PathRule::new("^Order", "Orders"),
        ]);
        let resolved = resolve_path(
            &unit("OrderLine", UnitKind::Entity),
            &layout(DirectoryStructure::Flat, false),
            &rules,
        );
        assert_eq!(resolved.path, "Lines/OrderLine.php");
    }

    #[test]
    fn test_kind_filter() {
        let rules = compile(&[PathRule::new(".*", "Enums").kind(UnitKind::Enum)]);
        let l = layout(DirectoryStructure::Flat, false);

        let entity = resolve_path(&unit("Status", UnitKind::Entity), &l, &rules);
        assert_eq!(entity.path, "Status.php");

        let en = resolve_path(&unit("Status", UnitKind::Enum), &l, &rules);
        assert_eq!(en.path, "Enums/Status.php");
    }

    #[test]
    fn test_strip_removes_first_match_only() {
        let rules = compile(&[PathRule::new("Dto", "").strip("Dto")]);
        let resolved = resolve_path(
            &unit("DtoOrderDto", UnitKind::ValueObject),
            &layout(DirectoryStructure::Flat, false),
            &rules,
        );
        assert_eq!(resolved.final_name, "OrderDto");
        assert_eq!(resolved.path, "OrderDto.php");
    }

    #[test]
    fn test_strip_to_empty_keeps_original() {
        let rules = compile(&[PathRule::new("^Event$", "Events").strip("Event")]);
        let resolved = resolve_path(
            &unit("Event", UnitKind::Entity),
            &layout(DirectoryStructure::Flat, false),
            &rules,
        );
        assert_eq!(resolved.final_name, "Event");
        assert_eq!(resolved.path, "Events/Event.php");
    }

    #[test]
    fn test_invalid_pattern_is_skipped_with_warning() {
        let (rules, warnings) = compile_rules(&[
            PathRule::new("(", "Broken"),
            PathRule::new("Line$", "Lines"),
        ]);
        assert_eq!(rules.len(), 1);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].severity.is_warning());
        assert_eq!(warnings[0].location.as_deref(), Some("path_rules[0]"));

        let resolved = resolve_path(
            &unit("OrderLine", UnitKind::Entity),
            &layout(DirectoryStructure::Flat, false),
            &rules,
        );
        assert_eq!(resolved.path, "Lines/OrderLine.php");
    }

    #[test]
    fn test_invalid_strip_keeps_rule() {
        let (rules, warnings) = compile_rules(&[PathRule::new("Event$", "Events").strip("[")]);
        assert_eq!(rules.len(), 1);
        assert_eq!(warnings.len(), 1);

        let resolved = resolve_path(
            &unit("PlacedEvent", UnitKind::Entity),
            &layout(DirectoryStructure::Flat, false),
            &rules,
        );
        assert_eq!(resolved.final_name, "PlacedEvent");
        assert_eq!(resolved.path, "Events/PlacedEvent.php");
    }

    #[test]
    fn test_empty_segments_are_dropped() {
        let u = UnitRef {
            name: "Order",
            kind: UnitKind::Entity,
            context: "",
            aggregate: "Order",
        };
        let resolved = resolve_path(&u, &layout(DirectoryStructure::ByAggregate, false), &[]);
        assert_eq!(resolved.path, "Order/Order.php");
    }
}
