use cmlgen_codegen::{
    builder::{CaseSpec, EnumSpec},
    resolver::ResolvedPath,
};
use cmlgen_core::to_case_identifier;
use cmlgen_ir::Enumeration;

use super::Emitter;
use crate::{PhpEnum, PhpFile};

impl Emitter<'_> {
    /// Emit a string-backed enum whose cases and values are the normalized
    /// labels.
    pub fn emit_enum(&self, enumeration: &Enumeration, resolved: &ResolvedPath) -> String {
        let spec = enumeration.values.iter().fold(
            EnumSpec::new(resolved.final_name.as_str()).backed_by("string"),
            |spec, label| {
                let case = to_case_identifier(label);
                let value = format!("'{}'", case);
                spec.case(CaseSpec::new(case).value(value))
            },
        );

        PhpFile::new(resolved.namespace.as_str())
            .add(PhpEnum(&spec))
            .render()
    }
}

#[cfg(test)]
mod tests {
    use cmlgen_codegen::generation::TypeRegistry;
    use cmlgen_config::GeneratorConfig;

    use super::*;
    use crate::adapters::PlainAdapter;

    #[test]
    fn test_emit_enum() {
        let config = GeneratorConfig::default();
        let registry = TypeRegistry::new();
        let adapter = PlainAdapter::new();
        let emitter = Emitter::new(&config, &registry, &adapter);

        let resolved = ResolvedPath {
            final_name: "Status".to_string(),
            path: "Status.php".to_string(),
            namespace: "App\\Models".to_string(),
        };
        let code = emitter.emit_enum(
            &Enumeration::new("Status").values(["Active", "pending-review"]),
            &resolved,
        );

        let expected = "\
<?php

declare(strict_types=1);

namespace App\\Models;

enum Status: string
{
    case ACTIVE = 'ACTIVE';
    case PENDING_REVIEW = 'PENDING_REVIEW';
}
";
        assert_eq!(code, expected);
    }
}
