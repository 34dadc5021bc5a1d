//! Output management: imports, resolved units and generated files.

mod imports;
mod output;
mod registry;

pub use imports::ImportCollector;
pub use output::OutputFile;
pub use registry::{TypeRegistry, UnitInfo, UnitPlan};
