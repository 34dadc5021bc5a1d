//! Shared code generation utilities for cmlgen.
//!
//! This crate provides the pieces a target-language generator is built from:
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, class specs)
//! - [`generation`] - Output management (ImportCollector, OutputFile, TypeRegistry)
//! - [`pipeline`] - Compilation phases from model to resolved unit plans
//! - [`resolver`] - Output path, namespace and identifier resolution
//! - [`paths`] - Target-language path constants

pub mod builder;
pub mod generation;
pub mod paths;
pub mod pipeline;
pub mod resolver;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
