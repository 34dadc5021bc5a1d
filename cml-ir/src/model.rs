//! Model tree: bounded contexts, aggregates and their units.

use serde::Serialize;

use crate::Property;

/// Parse root: an ordered list of bounded contexts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Model {
    pub bounded_contexts: Vec<BoundedContext>,
}

impl Model {
    /// Total number of enumerations, value objects and entities.
    pub fn unit_count(&self) -> usize {
        self.aggregates()
            .map(|(_, agg)| agg.unit_count())
            .sum::<usize>()
    }

    /// Iterate over every aggregate together with its bounded context.
    pub fn aggregates(&self) -> impl Iterator<Item = (&BoundedContext, &Aggregate)> {
        self.bounded_contexts
            .iter()
            .flat_map(|ctx| ctx.aggregates.iter().map(move |agg| (ctx, agg)))
    }

    pub fn is_empty(&self) -> bool {
        self.bounded_contexts.is_empty()
    }
}

/// Top-level namespace grouping aggregates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BoundedContext {
    pub name: String,
    pub aggregates: Vec<Aggregate>,
}

impl BoundedContext {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aggregates: Vec::new(),
        }
    }
}

/// Consistency boundary owning entities, value objects and enumerations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Aggregate {
    pub name: String,
    pub entities: Vec<Entity>,
    pub value_objects: Vec<ValueObject>,
    pub enums: Vec<Enumeration>,
}

impl Aggregate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Number of units this aggregate produces files for.
    pub fn unit_count(&self) -> usize {
        self.entities.len() + self.value_objects.len() + self.enums.len()
    }
}

/// Object with identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Entity {
    pub name: String,
    pub is_aggregate_root: bool,
    pub properties: Vec<Property>,
}

impl Entity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn aggregate_root(mut self) -> Self {
        self.is_aggregate_root = true;
        self
    }

    pub fn property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }
}

/// Immutable-by-convention object without identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValueObject {
    pub name: String,
    pub properties: Vec<Property>,
}

impl ValueObject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
        }
    }

    pub fn property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }
}

/// Closed, ordered set of string-backed values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Enumeration {
    pub name: String,
    pub values: Vec<String>,
}

impl Enumeration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
        }
    }

    pub fn values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values.extend(values.into_iter().map(Into::into));
        self
    }
}
