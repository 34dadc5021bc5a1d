//! Core utilities and types for the cmlgen generator.
//!
//! This crate provides fundamental types and utilities used across
//! the cmlgen crates.

mod file;
mod kind;
mod utils;

// File operations
pub use file::{File, FileRules, Overwrite, WriteResult};
// Fundamental types
pub use kind::UnitKind;
// String utilities
pub use utils::{is_identifier, to_camel_case, to_case_identifier, to_pascal_case};
