//! Domain model types for the cmlgen generator.
//!
//! This crate holds the intermediate representation produced by the CML
//! parser and consumed by the code generators.
//!
//! # Architecture
//!
//! ```text
//! model.cml → cml-syntax (parsing) → cml-ir (model) → codegen
//! ```
//!
//! The model is:
//! - Built once per parse call and read-only afterwards
//! - Ordered (declaration order is output order)
//! - Not deduplicated: two units may share a name

mod model;
mod property;

pub use model::{Aggregate, BoundedContext, Entity, Enumeration, Model, ValueObject};
pub use property::Property;
