//! Generated file records.

use cmlgen_core::UnitKind;
use serde::Serialize;

/// One generated source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputFile {
    /// Bare file name, e.g. `Order.php`.
    pub filename: String,
    /// Path relative to the output root, `/`-separated.
    pub path: String,
    pub content: String,
    pub kind: UnitKind,
}

impl OutputFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>, kind: UnitKind) -> Self {
        let path = path.into();
        let filename = path.rsplit('/').next().unwrap_or_default().to_string();
        Self {
            filename,
            path,
            content: content.into(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_from_path() {
        let file = OutputFile::new("Sales/Order/Order.php", "<?php", UnitKind::Entity);
        assert_eq!(file.filename, "Order.php");
        assert_eq!(file.path, "Sales/Order/Order.php");

        let flat = OutputFile::new("Status.php", "", UnitKind::Enum);
        assert_eq!(flat.filename, "Status.php");
    }

    #[test]
    fn test_serialize_kind() {
        let file = OutputFile::new("Money.php", "", UnitKind::ValueObject);
        let json = serde_json::to_value(&file).unwrap();
        assert_eq!(json["kind"], "valueobject");
    }
}
