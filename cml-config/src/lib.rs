//! Generation options for cmlgen, loaded from `cmlgen.toml`.
//!
//! Every key is optional. Errors are [`miette`] diagnostics pointing at the
//! offending part of the file.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod options;

use std::{path::Path, str::FromStr};

use cmlgen_core::{UnitKind, is_identifier};
pub use error::{Error, Result, SourceContext};
pub use options::{
    ConstructorType, DirectoryStructure, DoctrineOptions, Framework, PhpVersion, Visibility,
};
use serde::{Deserialize, Serialize};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "cmlgen.toml";

/// Namespace prefix used when none is configured.
pub const DEFAULT_NAMESPACE: &str = "App\\Models";

/// Root schema for cmlgen.toml
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub framework: Framework,
    pub php_version: PhpVersion,
    /// Namespace prefix, backslash separated
    pub namespace: String,
    pub property_visibility: Visibility,
    pub getters: bool,
    pub setters: bool,
    pub constructor: ConstructorType,
    /// Fold property declarations into constructor parameters
    pub constructor_promotion: bool,
    pub readonly_value_objects: bool,
    pub directory_structure: DirectoryStructure,
    /// Insert an `Enum`/`ValueObject`/`Entity` folder
    pub group_by_type: bool,
    pub doctrine: DoctrineOptions,
    /// Ordered; the first matching rule wins
    pub path_rules: Vec<PathRule>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            framework: Framework::default(),
            php_version: PhpVersion::default(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            property_visibility: Visibility::default(),
            getters: true,
            setters: true,
            constructor: ConstructorType::default(),
            constructor_promotion: false,
            readonly_value_objects: false,
            directory_structure: DirectoryStructure::default(),
            group_by_type: false,
            doctrine: DoctrineOptions::default(),
            path_rules: Vec::new(),
        }
    }
}

/// Routes units whose name matches `pattern` into `subfolder`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PathRule {
    /// Regular expression matched against the unit's original name
    pub pattern: String,
    /// Only apply to units of this kind
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<UnitKind>,
    /// Folder appended after the type folder; may contain `/`
    #[serde(default)]
    pub subfolder: String,
    /// Regular expression whose first match is removed from the name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strip: Option<String>,
}

impl PathRule {
    pub fn new(pattern: impl Into<String>, subfolder: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            kind: None,
            subfolder: subfolder.into(),
            strip: None,
        }
    }

    pub fn kind(mut self, kind: UnitKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn strip(mut self, strip: impl Into<String>) -> Self {
        self.strip = Some(strip.into());
        self
    }

    /// Non-empty subfolder segments.
    pub fn subfolder_segments(&self) -> impl Iterator<Item = &str> {
        self.subfolder
            .split(['/', '\\'])
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

impl GeneratorConfig {
    /// Load a cmlgen.toml file from the given path
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        Self::from_str_with_filename(&content, &filename)
    }

    /// Parse from a string with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let config: GeneratorConfig = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
        config.validate(&ctx)?;
        Ok(config)
    }

    /// Namespace prefix without leading or trailing separators.
    pub fn namespace_prefix(&self) -> &str {
        self.namespace.trim_matches('\\')
    }

    /// Whether value objects are generated readonly for the target version.
    pub fn readonly_value_objects_active(&self) -> bool {
        self.readonly_value_objects && self.php_version.supports_readonly_properties()
    }

    /// Validate the configuration after parsing
    pub fn validate(&self, ctx: &SourceContext) -> Result<()> {
        validate_namespace(self.namespace_prefix()).map_err(|reason| {
            ctx.invalid_namespace_error(self.namespace.clone(), reason)
        })?;

        for rule in &self.path_rules {
            if rule.subfolder_segments().any(|segment| segment == "..") {
                return Err(ctx.validation_error(
                    format!(
                        "path rule subfolder '{}' must not leave the output directory",
                        rule.subfolder
                    ),
                    &rule.subfolder,
                ));
            }
            if rule.subfolder.starts_with('/') {
                return Err(ctx.validation_error(
                    format!("path rule subfolder '{}' must be relative", rule.subfolder),
                    &rule.subfolder,
                ));
            }
        }

        Ok(())
    }
}

impl FromStr for GeneratorConfig {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, CONFIG_FILE_NAME)
    }
}

/// Check that a namespace is a list of identifiers. Empty means global.
fn validate_namespace(namespace: &str) -> std::result::Result<(), String> {
    if namespace.is_empty() {
        return Ok(());
    }
    for segment in namespace.split('\\') {
        if segment.is_empty() {
            return Err("namespace contains an empty segment".to_string());
        }
        if !is_identifier(segment) {
            return Err(format!("'{}' is not a valid identifier", segment));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_defaults_from_empty_file() {
        let config: GeneratorConfig = "".parse().unwrap();
        assert_eq!(config, GeneratorConfig::default());
        assert_eq!(config.namespace_prefix(), "App\\Models");
        assert_eq!(config.constructor, ConstructorType::All);
        assert!(config.doctrine.attributes);
    }

    #[test]
    fn test_full_file() {
        let src = r#"
framework = "doctrine"
php_version = "8.1"
namespace = "Acme\\Domain"
property_visibility = "public"
getters = false
setters = false
constructor = "required"
constructor_promotion = true
readonly_value_objects = true
directory_structure = "psr4"
group_by_type = true

[doctrine]
attributes = false

[[path_rules]]
pattern = "Event$"
kind = "entity"
subfolder = "Events/Domain"
strip = "Event$"

[[path_rules]]
pattern = "^Money"
subfolder = "Shared"
"#;
        let config: GeneratorConfig = src.parse().unwrap();
        assert_eq!(config.framework, Framework::Doctrine);
        assert_eq!(config.php_version, PhpVersion::Php81);
        assert_eq!(config.namespace, "Acme\\Domain");
        assert_eq!(config.property_visibility, Visibility::Public);
        assert!(!config.getters && !config.setters);
        assert_eq!(config.constructor, ConstructorType::Required);
        assert!(config.constructor_promotion);
        assert!(config.readonly_value_objects_active());
        assert_eq!(config.directory_structure, DirectoryStructure::Psr4);
        assert!(config.group_by_type);
        assert!(!config.doctrine.attributes);
        assert!(config.doctrine.collection_docblocks);

        assert_eq!(config.path_rules.len(), 2);
        let rule = &config.path_rules[0];
        assert_eq!(rule.kind, Some(UnitKind::Entity));
        assert_eq!(rule.strip.as_deref(), Some("Event$"));
        assert_eq!(
            rule.subfolder_segments().collect::<Vec<_>>(),
            vec!["Events", "Domain"]
        );
        assert_eq!(config.path_rules[1].kind, None);
    }

    #[test]
    fn test_readonly_needs_php_81() {
        let config: GeneratorConfig = "readonly_value_objects = true\nphp_version = \"8.0\""
            .parse()
            .unwrap();
        assert!(!config.readonly_value_objects_active());
    }

    #[test]
    fn test_parse_error_has_span() {
        let err = "framework = \"symfony\"".parse::<GeneratorConfig>().unwrap_err();
        match *err {
            Error::Parse { span, .. } => assert!(span.is_some()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!("frameworks = \"plain\"".parse::<GeneratorConfig>().is_err());
    }

    #[test]
    fn test_invalid_namespace() {
        let err = "namespace = \"App\\\\1Models\"".parse::<GeneratorConfig>().unwrap_err();
        assert!(matches!(*err, Error::InvalidNamespace { .. }));

        let err = "namespace = \"App\\\\\\\\Models\"".parse::<GeneratorConfig>().unwrap_err();
        assert!(matches!(*err, Error::InvalidNamespace { .. }));
    }

    #[test]
    fn test_empty_namespace_is_global() {
        let config: GeneratorConfig = "namespace = \"\"".parse().unwrap();
        assert_eq!(config.namespace_prefix(), "");
    }

    #[test]
    fn test_leading_backslash_is_tolerated() {
        let config: GeneratorConfig = "namespace = \"\\\\App\"".parse().unwrap();
        assert_eq!(config.namespace_prefix(), "App");
    }

    #[test]
    fn test_subfolder_escape_rejected() {
        let src = "[[path_rules]]\npattern = \"X\"\nsubfolder = \"../outside\"\n";
        let err = src.parse::<GeneratorConfig>().unwrap_err();
        match *err {
            Error::Validation { span, message, .. } => {
                assert!(message.contains("../outside"));
                assert!(span.is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_pattern_is_accepted() {
        let src = "[[path_rules]]\npattern = \"\"\nsubfolder = \"All\"\n";
        let config: GeneratorConfig = src.parse().unwrap();
        assert_eq!(config.path_rules[0].pattern, "");
    }

    #[test]
    fn test_invalid_regex_is_not_a_config_error() {
        let src = "[[path_rules]]\npattern = \"(\"\nsubfolder = \"Broken\"\n";
        assert!(src.parse::<GeneratorConfig>().is_ok());
    }

    #[test]
    fn test_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "framework = \"laravel\"\n").unwrap();

        let config = GeneratorConfig::from_file(&path).unwrap();
        assert_eq!(config.framework, Framework::Laravel);

        let err = GeneratorConfig::from_file(temp.path().join("missing.toml")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
