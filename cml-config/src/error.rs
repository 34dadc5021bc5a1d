use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for cmlgen-config operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source content and filename of the configuration being loaded.
///
/// Every diagnostic produced while loading a file points back into it.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error, labelled at the first occurrence of
    /// `needle` in the source when there is one.
    pub fn validation_error(&self, message: impl Into<String>, needle: &str) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: find_span(&self.src, needle),
            message: message.into(),
        })
    }

    /// Create an invalid namespace error.
    pub fn invalid_namespace_error(
        &self,
        namespace: impl Into<String>,
        reason: impl Into<String>,
    ) -> Box<Error> {
        let namespace = namespace.into();
        Box::new(Error::InvalidNamespace {
            src: self.named_source(),
            span: find_span(&self.src, &toml_escaped(&namespace)),
            namespace,
            reason: reason.into(),
        })
    }
}

/// Locate a quoted string value in the TOML source.
fn find_span(src: &str, needle: &str) -> Option<SourceSpan> {
    if needle.is_empty() {
        return None;
    }
    let quoted = format!("\"{}\"", needle);
    src.find(&quoted)
        .map(|offset| SourceSpan::from((offset, quoted.len())))
        .or_else(|| {
            src.find(needle)
                .map(|offset| SourceSpan::from((offset, needle.len())))
        })
}

/// Namespaces are written with doubled backslashes in basic TOML strings.
fn toml_escaped(value: &str) -> String {
    value.replace('\\', "\\\\")
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(cmlgen::io),
        help("create a cmlgen.toml file or pass its path with --config")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse cmlgen.toml")]
    #[diagnostic(code(cmlgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(cmlgen::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("invalid namespace '{namespace}'")]
    #[diagnostic(
        code(cmlgen::invalid_namespace),
        help("{reason}. Use backslash-separated PHP identifiers, e.g. 'App\\Models'.")
    )]
    InvalidNamespace {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid namespace")]
        span: Option<SourceSpan>,
        namespace: String,
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_span_prefers_quoted_value() {
        let src = "namespace = \"App\"\n# App\n";
        let span = find_span(src, "App").unwrap();
        assert_eq!(span.offset(), 12);
        assert_eq!(span.len(), 5);
    }

    #[test]
    fn test_find_span_missing() {
        assert!(find_span("framework = \"plain\"", "nope").is_none());
        assert!(find_span("framework = \"plain\"", "").is_none());
    }

    #[test]
    fn test_invalid_namespace_points_at_escaped_value() {
        let ctx = SourceContext::new("namespace = \"App\\\\1Models\"\n", "cmlgen.toml");
        let err = ctx.invalid_namespace_error("App\\1Models", "bad segment");
        match *err {
            Error::InvalidNamespace { span, .. } => assert_eq!(span.unwrap().offset(), 12),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
