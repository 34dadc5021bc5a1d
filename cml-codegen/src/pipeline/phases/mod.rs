//! Built-in pipeline phases.
//!
//! - [`RulesPhase`] - compiles path rules, reporting broken patterns
//! - [`ResolvePhase`] - places every unit and builds the type registry
//! - [`ValidatePhase`] - runs lints over the resolved units

mod resolve;
mod rules;
mod validate;

pub use resolve::ResolvePhase;
pub use rules::RulesPhase;
pub use validate::{DuplicateOutputPathLint, DuplicateUnitNameLint, Lint, ValidatePhase};
