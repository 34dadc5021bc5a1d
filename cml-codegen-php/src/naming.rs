//! PHP-specific naming conventions.

use cmlgen_codegen::pipeline::{CompilationContext, Diagnostic, phases::Lint};
use cmlgen_core::to_pascal_case;

/// Words PHP does not accept as class, enum or interface names.
pub const PHP_RESERVED_WORDS: &[&str] = &[
    // Keywords
    "abstract",
    "and",
    "array",
    "as",
    "break",
    "callable",
    "case",
    "catch",
    "class",
    "clone",
    "const",
    "continue",
    "declare",
    "default",
    "do",
    "echo",
    "else",
    "elseif",
    "empty",
    "enddeclare",
    "endfor",
    "endforeach",
    "endif",
    "endswitch",
    "endwhile",
    "eval",
    "exit",
    "extends",
    "final",
    "finally",
    "fn",
    "for",
    "foreach",
    "function",
    "global",
    "goto",
    "if",
    "implements",
    "include",
    "include_once",
    "instanceof",
    "insteadof",
    "interface",
    "isset",
    "list",
    "match",
    "namespace",
    "new",
    "or",
    "print",
    "private",
    "protected",
    "public",
    "readonly",
    "require",
    "require_once",
    "return",
    "static",
    "switch",
    "throw",
    "trait",
    "try",
    "unset",
    "use",
    "var",
    "while",
    "xor",
    "yield",
    // Reserved type names
    "bool",
    "false",
    "float",
    "int",
    "iterable",
    "mixed",
    "never",
    "null",
    "object",
    "parent",
    "self",
    "string",
    "true",
    "void",
];

/// Whether `name` is reserved in PHP (case-insensitive).
pub fn is_reserved(name: &str) -> bool {
    let lower = name.to_lowercase();
    PHP_RESERVED_WORDS.contains(&lower.as_str())
}

/// `getCustomerName` for `customerName`.
pub fn getter_name(property: &str) -> String {
    format!("get{}", to_pascal_case(property))
}

/// `setCustomerName` for `customerName`.
pub fn setter_name(property: &str) -> String {
    format!("set{}", to_pascal_case(property))
}

/// Lint that warns when a generated type would be named after a reserved word.
pub struct ReservedClassNameLint;

impl Lint for ReservedClassNameLint {
    fn name(&self) -> &'static str {
        "reserved-class-name"
    }

    fn description(&self) -> &'static str {
        "Detect units whose PHP name is a reserved word"
    }

    fn check(&self, ctx: &CompilationContext, diagnostics: &mut Vec<Diagnostic>) {
        for plan in &ctx.plans {
            let name = &plan.resolved.final_name;
            if is_reserved(name) {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!(
                            "{} '{}' uses a reserved PHP word as its name; the generated file will not compile",
                            plan.kind, name
                        ),
                    )
                    .at(plan.location()),
                );
            }
        }
    }
}
