//! Indentation-aware string buffer for generated code.

use super::{CodeFragment, Indent, Renderable};

/// Incremental writer for indented source text.
///
/// Lines are written at the current indentation level; [`CodeFragment`]s and
/// [`Renderable`] nodes are applied recursively.
///
/// ```
/// use cmlgen_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::php();
/// builder
///     .push_line("enum Status: string")
///     .push_line("{")
///     .push_indent()
///     .push_line("case OPEN = 'OPEN';")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(
///     builder.build(),
///     "enum Status: string\n{\n    case OPEN = 'OPEN';\n}\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// PSR-12 style: four spaces.
    pub fn php() -> Self {
        Self::new(Indent::PHP)
    }

    pub fn push_line(&mut self, s: &str) -> &mut Self {
        for _ in 0..self.level {
            self.buffer.push_str(self.indent.as_str());
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Blank lines never carry indentation.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.level += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.level = self.level.saturating_sub(1);
        self
    }

    /// Write a `/** ... */` block. A single line collapses to `/** text */`.
    pub fn push_doc_block(&mut self, lines: &[String]) -> &mut Self {
        match lines {
            [] => {}
            [single] => {
                self.push_line(&format!("/** {} */", single));
            }
            _ => {
                self.push_line("/**");
                for line in lines {
                    if line.is_empty() {
                        self.push_line(" *");
                    } else {
                        self.push_line(&format!(" * {}", line));
                    }
                }
                self.push_line(" */");
            }
        }
        self
    }

    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                body.into_iter().for_each(|f| self.apply_fragment(f));
                self.push_dedent();
                if let Some(close) = close {
                    self.push_line(&close);
                }
            }
            CodeFragment::Indent(fragments) => {
                self.push_indent();
                fragments.into_iter().for_each(|f| self.apply_fragment(f));
                self.push_dedent();
            }
            CodeFragment::DocBlock(lines) => {
                self.push_doc_block(&lines);
            }
        }
    }

    pub fn build(self) -> String {
        self.buffer
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::php()
    }
}
