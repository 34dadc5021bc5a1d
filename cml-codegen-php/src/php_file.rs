//! PhpFile abstraction for structured PHP file generation.
//!
//! A file is the `<?php` preamble, an optional namespace declaration, the
//! `use` imports, and the body, each section separated by a blank line.

use cmlgen_codegen::{CodeBuilder, CodeFragment, Indent, Renderable, generation::ImportCollector};

/// A structured representation of a PHP source file.
///
/// # Example
///
/// ```
/// use cmlgen_codegen::builder::EnumSpec;
/// use cmlgen_codegen_php::{PhpEnum, PhpFile};
///
/// let spec = EnumSpec::new("Status").backed_by("string");
/// let code = PhpFile::new("App\\Models").add(PhpEnum(&spec)).render();
///
/// assert!(code.starts_with("<?php\n\ndeclare(strict_types=1);\n\nnamespace App\\Models;\n"));
/// ```
#[derive(Default)]
pub struct PhpFile {
    namespace: String,
    imports: ImportCollector,
    body: Vec<Vec<CodeFragment>>,
}

impl PhpFile {
    /// Create a file in `namespace`; an empty namespace means the global one.
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            ..Self::default()
        }
    }

    /// Replace the imports.
    pub fn imports(mut self, imports: ImportCollector) -> Self {
        self.imports = imports;
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Render the file with PSR-12 indentation.
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::PHP)
    }

    /// Render the file with custom indentation.
    pub fn render_with_indent(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);

        builder
            .push_line("<?php")
            .push_blank()
            .push_line("declare(strict_types=1);");

        let namespace = self.namespace.trim_matches('\\');
        if !namespace.is_empty() {
            builder
                .push_blank()
                .push_line(&format!("namespace {};", namespace));
        }

        let statements = self.imports.statements();
        if !statements.is_empty() {
            builder.push_blank();
            for statement in &statements {
                builder.push_line(&format!("use {};", statement));
            }
        }

        for fragments in &self.body {
            builder.push_blank();
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }
}
