//! Report data structures for commands.
//!
//! Commands collect what happened into a report, then render it to an
//! [`Output`] target.

mod check;
mod generate;
mod model;
mod output;

pub use check::{CheckReport, UnitCounts};
pub use generate::{GenerateReport, PreviewReport};
pub use model::ModelReport;
pub use output::{Output, Report, TerminalOutput};
#[cfg(test)]
pub use output::RecordingOutput;
