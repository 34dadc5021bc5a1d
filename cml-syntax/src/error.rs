use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for cml-syntax operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(cmlgen::io),
        help("pass the path to an existing .cml model file")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
