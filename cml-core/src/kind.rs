//! Kinds of generated units.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// The kind of model element a generated file is produced from.
///
/// Serialized in lowercase (`enum`, `valueobject`, `entity`), which is also
/// the form accepted in path rule kind filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    Enum,
    ValueObject,
    Entity,
}

impl UnitKind {
    /// Lowercase identifier used in configuration and output records.
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitKind::Enum => "enum",
            UnitKind::ValueObject => "valueobject",
            UnitKind::Entity => "entity",
        }
    }

    /// Folder segment inserted when output is grouped by type.
    pub fn folder_name(&self) -> &'static str {
        match self {
            UnitKind::Enum => "Enum",
            UnitKind::ValueObject => "ValueObject",
            UnitKind::Entity => "Entity",
        }
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UnitKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "enum" => Ok(UnitKind::Enum),
            "valueobject" | "value-object" | "value_object" => Ok(UnitKind::ValueObject),
            "entity" => Ok(UnitKind::Entity),
            _ => Err(format!(
                "unknown unit kind '{}', expected 'enum', 'valueobject' or 'entity'",
                s
            )),
        }
    }
}
