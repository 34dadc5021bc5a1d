//! PHP code generator for cmlgen.
//!
//! Turns a parsed CML model into PHP 8 source files: backed enums for
//! enumerations, `final` classes for value objects and classes for
//! entities, flavoured for plain PHP, Laravel (Eloquent) or Doctrine ORM.
//!
//! # Usage
//!
//! ```
//! use cmlgen_config::GeneratorConfig;
//! use cmlgen_ir::{Aggregate, BoundedContext, Entity, Model, Property};
//!
//! let mut order = Aggregate::new("Order");
//! order
//!     .entities
//!     .push(Entity::new("Order").property(Property::new("code", "String")));
//! let mut sales = BoundedContext::new("Sales");
//! sales.aggregates.push(order);
//! let model = Model { bounded_contexts: vec![sales] };
//!
//! let files = cmlgen_codegen_php::generate(&model, &GeneratorConfig::default()).unwrap();
//! assert_eq!(files[0].path, "Order.php");
//! assert!(files[0].content.contains("private string $code;"));
//! ```
//!
//! # Generated Output
//!
//! One file per unit, ordered per bounded context and aggregate: enums,
//! then value objects, then entities. Paths and namespaces follow the
//! configured directory structure and path rules.

mod generator;
mod naming;
mod php_file;
mod renderer;
mod type_mapper;

pub mod adapters;
pub mod emit;

use cmlgen_codegen::{
    generation::OutputFile,
    pipeline::{Pipeline, phases::ValidatePhase},
};
use cmlgen_config::GeneratorConfig;
use cmlgen_ir::Model;
use eyre::Result;

pub use adapters::{DoctrineAdapter, FrameworkAdapter, LaravelAdapter, PlainAdapter};
pub use generator::{GenerateResult, Generator};
pub use naming::{ReservedClassNameLint, getter_name, is_reserved, setter_name};
pub use php_file::PhpFile;
pub use renderer::{PhpClass, PhpEnum, PhpRenderer};
pub use type_mapper::{TypeFlags, map_storage_type, map_type};

/// The pipeline with the PHP-specific lints added.
pub fn pipeline() -> Pipeline {
    Pipeline::new().phase(ValidatePhase::empty().with_lint(ReservedClassNameLint))
}

/// Generate every PHP file for `model`.
///
/// Pure: the same model and configuration always produce the same files.
/// Warnings (invalid path rules, name collisions) do not stop generation;
/// use [`pipeline`] and [`Generator`] directly to inspect them.
pub fn generate(model: &Model, config: &GeneratorConfig) -> Result<Vec<OutputFile>> {
    let ctx = pipeline().run(model.clone(), config.clone())?;
    Generator::from_context(ctx).files()
}
