//! Lenient parser for the CML modeling notation.
//!
//! Turns raw CML text into a [`Model`]. Parsing never fails: incomplete or
//! unrecognized constructs are dropped rather than reported. The only
//! fallible entry point is [`parse_file`], which can fail to read the file.
//!
//! # Example
//!
//! ```
//! let model = cmlgen_syntax::parse(
//!     r#"
//!     BoundedContext Sales {
//!       Aggregate Order {
//!         enum Status { Open, Closed }
//!       }
//!     }
//!     "#,
//! );
//!
//! assert_eq!(model.unit_count(), 1);
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod lexer;
mod parser;
mod property;

use std::path::Path;

pub use cmlgen_ir::Model;
pub use error::{Error, Result};
pub use lexer::{LogicalLine, logical_lines};
pub use parser::parse;
pub use property::{AGGREGATE_ROOT_MARKER, parse_property};

/// Read and parse a CML file.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Model> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source: e,
        })
    })?;
    Ok(parse(&content))
}
