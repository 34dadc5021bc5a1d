//! Intermediate code fragments.
//!
//! Declarations become fragments first and are written out through a
//! [`CodeBuilder`](super::CodeBuilder) afterwards, so they compose without
//! tracking indentation themselves.

/// A piece of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    Line(String),
    Blank,
    /// Header line, indented body and optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// Fragments written one level deeper.
    Indent(Vec<CodeFragment>),
    /// A `/** ... */` doc block, one entry per line.
    DocBlock(Vec<String>),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn blank() -> Self {
        Self::Blank
    }

    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: Option<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }

    pub fn indent(fragments: Vec<CodeFragment>) -> Self {
        Self::Indent(fragments)
    }

    pub fn doc_block(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::DocBlock(lines.into_iter().map(Into::into).collect())
    }
}

/// Anything that renders to code fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doc_block_collects_lines() {
        assert_eq!(
            CodeFragment::doc_block(["@var int"]),
            CodeFragment::DocBlock(vec!["@var int".to_string()])
        );
    }

    #[test]
    fn test_renderable_through_reference() {
        struct Case;
        impl Renderable for Case {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::line("case OPEN = 'OPEN';")]
            }
        }

        let node = &Case;
        assert_eq!(
            Renderable::to_fragments(&node),
            vec![CodeFragment::Line("case OPEN = 'OPEN';".to_string())]
        );
    }
}
