//! Path constants for generated files.

/// PHP-specific paths and constants.
pub mod php {
    /// File extension for PHP source files.
    pub const FILE_EXTENSION: &str = "php";

    /// Namespace segment separator.
    pub const NAMESPACE_SEPARATOR: &str = "\\";

    /// Separator used in generated relative paths, independent of the host OS.
    pub const PATH_SEPARATOR: &str = "/";
}
