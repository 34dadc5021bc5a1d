//! Property declarations.

use serde::Serialize;

/// A typed attribute of an entity or value object.
///
/// When `is_collection` is set, `ty` holds the element type rather than the
/// `Set<..>`/`List<..>` wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Property {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub nullable: bool,
    pub is_relation: bool,
    pub is_collection: bool,
    pub is_enum: bool,
}

impl Property {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            nullable: false,
            is_relation: false,
            is_collection: false,
            is_enum: false,
        }
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn relation(mut self) -> Self {
        self.is_relation = true;
        self
    }

    pub fn collection(mut self) -> Self {
        self.is_collection = true;
        self
    }

    pub fn enum_ref(mut self) -> Self {
        self.is_enum = true;
        self
    }
}
