//! Built-in lints.

mod duplicate_output_path;
mod duplicate_unit_name;

pub use duplicate_output_path::DuplicateOutputPathLint;
pub use duplicate_unit_name::DuplicateUnitNameLint;
