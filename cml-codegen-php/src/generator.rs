//! PHP code generator driven by a compiled pipeline context.

use std::path::Path;

use cmlgen_codegen::{
    generation::{OutputFile, UnitPlan},
    pipeline::{CompilationContext, Diagnostic},
};
use cmlgen_core::{File, FileRules, UnitKind, WriteResult};
use cmlgen_ir::Aggregate;
use eyre::{Result, eyre};

use crate::{
    adapters::{FrameworkAdapter, for_framework},
    emit::Emitter,
};

/// Result of writing generated files to disk.
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Paths (relative to the output directory) that were written.
    pub written: Vec<String>,
    /// Paths left untouched because they already existed.
    pub skipped: Vec<String>,
}

/// PHP code generator producing one file per resolved unit.
pub struct Generator {
    ctx: CompilationContext,
    adapter: Box<dyn FrameworkAdapter>,
}

impl Generator {
    /// Create a generator from a pipeline context, selecting the framework
    /// adapter from its configuration.
    pub fn from_context(ctx: CompilationContext) -> Self {
        let adapter = for_framework(ctx.config.framework);
        Self { ctx, adapter }
    }

    pub fn context(&self) -> &CompilationContext {
        &self.ctx
    }

    /// Diagnostics collected by the pipeline.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.ctx.diagnostics
    }

    /// Emit every unit in output order.
    pub fn files(&self) -> Result<Vec<OutputFile>> {
        let emitter = Emitter::new(&self.ctx.config, &self.ctx.registry, self.adapter.as_ref());

        self.ctx
            .plans
            .iter()
            .map(|plan| {
                let content = self.emit(&emitter, plan)?;
                tracing::debug!(path = %plan.resolved.path, kind = %plan.kind, "emitted unit");
                Ok(OutputFile::new(
                    plan.resolved.path.clone(),
                    content,
                    plan.kind,
                ))
            })
            .collect()
    }

    /// Write every file below `output_dir`.
    pub fn write(&self, output_dir: &Path, rules: FileRules) -> Result<GenerateResult> {
        let mut result = GenerateResult::default();

        for output in self.files()? {
            let file = File::new(output_dir.join(&output.path), output.content)
                .with_rules(rules.clone());
            match file.write()? {
                WriteResult::Written => result.written.push(output.path),
                WriteResult::Skipped => result.skipped.push(output.path),
            }
        }

        tracing::debug!(
            written = result.written.len(),
            skipped = result.skipped.len(),
            "wrote files to {}",
            output_dir.display()
        );
        Ok(result)
    }

    fn emit(&self, emitter: &Emitter<'_>, plan: &UnitPlan) -> Result<String> {
        let aggregate = self.aggregate(plan)?;
        let missing = || eyre!("unit {} is not part of the model", plan.location());

        let content = match plan.kind {
            UnitKind::Enum => {
                let unit = aggregate.enums.get(plan.index).ok_or_else(missing)?;
                emitter.emit_enum(unit, &plan.resolved)
            }
            UnitKind::ValueObject => {
                let unit = aggregate.value_objects.get(plan.index).ok_or_else(missing)?;
                emitter.emit_value_object(unit, plan)
            }
            UnitKind::Entity => {
                let unit = aggregate.entities.get(plan.index).ok_or_else(missing)?;
                emitter.emit_entity(unit, plan)
            }
        };
        Ok(content)
    }

    fn aggregate(&self, plan: &UnitPlan) -> Result<&Aggregate> {
        self.ctx
            .model
            .bounded_contexts
            .get(plan.context_index)
            .and_then(|ctx| ctx.aggregates.get(plan.aggregate_index))
            .ok_or_else(|| eyre!("aggregate of unit {} is not part of the model", plan.location()))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use cmlgen_config::GeneratorConfig;
    use cmlgen_ir::{BoundedContext, Entity, Enumeration, Model, Property};
    use tempfile::TempDir;

    use super::*;

    fn context() -> CompilationContext {
        let mut order = Aggregate::new("Order");
        order
            .enums
            .push(Enumeration::new("Status").values(["Open"]));
        order.entities.push(
            Entity::new("Order")
                .aggregate_root()
                .property(Property::new("status", "Status")),
        );
        let mut sales = BoundedContext::new("Sales");
        sales.aggregates.push(order);

        crate::pipeline()
            .run(
                Model {
                    bounded_contexts: vec![sales],
                },
                GeneratorConfig::default(),
            )
            .unwrap()
    }

    #[test]
    fn test_files_in_plan_order() {
        let generator = Generator::from_context(context());
        let files = generator.files().unwrap();

        let paths: Vec<_> = files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["Status.php", "Order.php"]);
        assert_eq!(files[0].kind, UnitKind::Enum);
        assert!(files[1].content.contains("private Status $status;"));
        assert!(generator.diagnostics().is_empty());
    }

    #[test]
    fn test_write_and_skip_existing() {
        let temp = TempDir::new().unwrap();
        let generator = Generator::from_context(context());

        let result = generator.write(temp.path(), FileRules::default()).unwrap();
        assert_eq!(result.written, vec!["Status.php", "Order.php"]);

        fs::write(temp.path().join("Order.php"), "edited").unwrap();
        let result = generator
            .write(temp.path(), FileRules::skip_existing())
            .unwrap();
        assert!(result.written.is_empty());
        assert_eq!(result.skipped.len(), 2);
        assert_eq!(
            fs::read_to_string(temp.path().join("Order.php")).unwrap(),
            "edited"
        );
    }

    #[test]
    fn test_plan_outside_model_is_an_error() {
        let mut ctx = context();
        ctx.plans[0].index = 7;
        let err = Generator::from_context(ctx).files().unwrap_err();
        assert!(err.to_string().contains("Sales.Order.Status"));
    }
}
