//! Check command report data structures.

use std::path::PathBuf;

use cmlgen_codegen::pipeline::Diagnostic;
use cmlgen_ir::Model;

use super::output::{Output, Report};

/// Number of declarations of each kind in a model.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UnitCounts {
    pub contexts: usize,
    pub aggregates: usize,
    pub entities: usize,
    pub value_objects: usize,
    pub enums: usize,
}

impl UnitCounts {
    pub fn from_model(model: &Model) -> Self {
        let mut counts = Self {
            contexts: model.bounded_contexts.len(),
            ..Self::default()
        };
        for (_, aggregate) in model.aggregates() {
            counts.aggregates += 1;
            counts.entities += aggregate.entities.len();
            counts.value_objects += aggregate.value_objects.len();
            counts.enums += aggregate.enums.len();
        }
        counts
    }

    pub fn units(&self) -> usize {
        self.entities + self.value_objects + self.enums
    }
}

/// Report data from model and configuration validation.
#[derive(Debug)]
pub struct CheckReport {
    pub model_path: PathBuf,
    /// Configuration file in use, `None` for defaults.
    pub config_path: Option<PathBuf>,
    pub diagnostics: Vec<Diagnostic>,
    pub counts: UnitCounts,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.iter().any(|d| d.severity.is_error())
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for diag in &self.diagnostics {
            out.diagnostic(&format!("{}: {}", diag.severity, diag.message));
            if let Some(loc) = &diag.location {
                out.diagnostic(&format!("  --> {}", loc));
            }
        }

        if !self.is_valid() {
            return;
        }
        if !self.diagnostics.is_empty() {
            out.newline();
        }

        out.preformatted(&format!("✓ {} is valid", self.model_path.display()));
        out.newline();
        let config = self
            .config_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "defaults".to_string());
        out.key_value("config", &config);
        out.key_value("bounded contexts", &self.counts.contexts.to_string());
        out.key_value("aggregates", &self.counts.aggregates.to_string());
        out.key_value("entities", &self.counts.entities.to_string());
        out.key_value("value objects", &self.counts.value_objects.to_string());
        out.key_value("enums", &self.counts.enums.to_string());
    }
}
