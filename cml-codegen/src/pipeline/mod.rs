//! Compilation pipeline for code generation.
//!
//! The [`Pipeline`] takes a parsed model and the generation options through
//! a fixed sequence of phases:
//!
//! - Explicit phase boundaries (rules → resolve → validate)
//! - Plugin hooks for extensibility (before/after each phase)
//! - Unified diagnostics collection
//! - Shared results via [`CompilationContext`]
//!
//! # Example
//!
//! ```
//! use cmlgen_codegen::pipeline::Pipeline;
//! use cmlgen_config::GeneratorConfig;
//! use cmlgen_ir::{Aggregate, BoundedContext, Entity, Model};
//!
//! let mut order = Aggregate::new("Order");
//! order.entities.push(Entity::new("Order").aggregate_root());
//! let mut sales = BoundedContext::new("Sales");
//! sales.aggregates.push(order);
//! let model = Model { bounded_contexts: vec![sales] };
//!
//! let ctx = Pipeline::new().run(model, GeneratorConfig::default()).unwrap();
//! assert_eq!(ctx.plans.len(), 1);
//! assert_eq!(ctx.plans[0].resolved.path, "Order.php");
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use plugin::Plugin;
pub use runner::Pipeline;
