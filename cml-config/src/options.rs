//! Enumerated generation options.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Framework flavour of the generated classes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    /// Plain PHP classes
    #[default]
    Plain,
    /// Eloquent models
    Laravel,
    /// Doctrine ORM mapped entities
    Doctrine,
}

impl Framework {
    pub fn as_str(&self) -> &'static str {
        match self {
            Framework::Plain => "plain",
            Framework::Laravel => "laravel",
            Framework::Doctrine => "doctrine",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Framework {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" | "php" => Ok(Framework::Plain),
            "laravel" | "eloquent" => Ok(Framework::Laravel),
            "doctrine" => Ok(Framework::Doctrine),
            _ => Err(format!(
                "unknown framework '{}', expected 'plain', 'laravel' or 'doctrine'",
                s
            )),
        }
    }
}

/// Target PHP version. Ordered, so features can be gated with comparisons.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize,
)]
pub enum PhpVersion {
    #[serde(rename = "8.0")]
    Php80,
    #[serde(rename = "8.1")]
    Php81,
    #[default]
    #[serde(rename = "8.2")]
    Php82,
    #[serde(rename = "8.3")]
    Php83,
}

impl PhpVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhpVersion::Php80 => "8.0",
            PhpVersion::Php81 => "8.1",
            PhpVersion::Php82 => "8.2",
            PhpVersion::Php83 => "8.3",
        }
    }

    /// `readonly` on individual properties (8.1+).
    pub fn supports_readonly_properties(&self) -> bool {
        *self >= PhpVersion::Php81
    }

    /// `readonly class` (8.2+).
    pub fn supports_readonly_classes(&self) -> bool {
        *self >= PhpVersion::Php82
    }
}

impl fmt::Display for PhpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PhpVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "8.0" | "80" => Ok(PhpVersion::Php80),
            "8.1" | "81" => Ok(PhpVersion::Php81),
            "8.2" | "82" => Ok(PhpVersion::Php82),
            "8.3" | "83" => Ok(PhpVersion::Php83),
            _ => Err(format!(
                "unsupported PHP version '{}', expected one of 8.0, 8.1, 8.2, 8.3",
                s
            )),
        }
    }
}

/// Visibility of generated properties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    #[default]
    Private,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which properties become constructor parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConstructorType {
    /// No parameters
    None,
    /// Non-nullable properties only
    Required,
    /// Every property
    #[default]
    All,
}

impl ConstructorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConstructorType::None => "none",
            ConstructorType::Required => "required",
            ConstructorType::All => "all",
        }
    }

    /// Whether a property with the given nullability is a parameter.
    pub fn includes(&self, nullable: bool) -> bool {
        match self {
            ConstructorType::None => false,
            ConstructorType::Required => !nullable,
            ConstructorType::All => true,
        }
    }
}

impl fmt::Display for ConstructorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Directory layout of the generated tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DirectoryStructure {
    /// Every file at the root
    #[default]
    Flat,
    /// `<Context>/`
    ByContext,
    /// `<Context>/<Aggregate>/`
    ByAggregate,
    /// `<Context>/<Aggregate>/` with namespaces following directories
    Psr4,
}

impl DirectoryStructure {
    pub fn as_str(&self) -> &'static str {
        match self {
            DirectoryStructure::Flat => "flat",
            DirectoryStructure::ByContext => "by-context",
            DirectoryStructure::ByAggregate => "by-aggregate",
            DirectoryStructure::Psr4 => "psr4",
        }
    }
}

impl fmt::Display for DirectoryStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DirectoryStructure {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "flat" => Ok(DirectoryStructure::Flat),
            "by-context" | "context" => Ok(DirectoryStructure::ByContext),
            "by-aggregate" | "aggregate" => Ok(DirectoryStructure::ByAggregate),
            "psr4" | "psr-4" => Ok(DirectoryStructure::Psr4),
            _ => Err(format!(
                "unknown directory structure '{}', expected 'flat', 'by-context', 'by-aggregate' or 'psr4'",
                s
            )),
        }
    }
}

/// Doctrine-specific toggles (`[doctrine]`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct DoctrineOptions {
    /// Emit `#[ORM\...]` mapping attributes
    pub attributes: bool,
    /// `@var Collection<int, X>` on relation collections
    pub collection_docblocks: bool,
    /// `@var array<int, T>` on primitive collections
    pub array_docblocks: bool,
}

impl Default for DoctrineOptions {
    fn default() -> Self {
        Self {
            attributes: true,
            collection_docblocks: true,
            array_docblocks: true,
        }
    }
}
