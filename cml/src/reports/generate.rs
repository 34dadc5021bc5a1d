//! Generate command report data structures.

use std::path::PathBuf;

use cmlgen_codegen::generation::OutputFile;

use super::output::{Output, Report};

/// Files written (or left alone) by a generation run.
#[derive(Debug)]
pub struct GenerateReport {
    pub output_dir: PathBuf,
    pub written: Vec<String>,
    pub skipped: Vec<String>,
    pub warnings: usize,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        if !self.written.is_empty() {
            out.section(&format!("Generated ({})", self.written.len()));
            for path in &self.written {
                out.added_item(path);
            }
        }

        if !self.skipped.is_empty() {
            if !self.written.is_empty() {
                out.newline();
            }
            out.section(&format!("Skipped existing ({})", self.skipped.len()));
            for path in &self.skipped {
                out.list_item(path);
            }
        }

        if !self.written.is_empty() || !self.skipped.is_empty() {
            out.newline();
        }
        let mut summary = format!(
            "{} file{} written to {}",
            self.written.len(),
            if self.written.len() == 1 { "" } else { "s" },
            self.output_dir.display()
        );
        if self.warnings > 0 {
            summary.push_str(&format!(
                " with {} warning{}",
                self.warnings,
                if self.warnings == 1 { "" } else { "s" }
            ));
        }
        out.preformatted(&summary);
    }
}

/// Files a dry run would write.
#[derive(Debug)]
pub struct PreviewReport {
    pub files: Vec<OutputFile>,
}

impl Report for PreviewReport {
    fn render(&self, out: &mut dyn Output) {
        for file in &self.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} file{} would be generated",
            self.files.len(),
            if self.files.len() == 1 { "" } else { "s" }
        ));
    }
}

#[cfg(test)]
mod tests {
    use cmlgen_core::UnitKind;

    use super::*;
    use crate::reports::RecordingOutput;

    #[test]
    fn test_generate_report() {
        let report = GenerateReport {
            output_dir: PathBuf::from("out"),
            written: vec!["Order.php".to_string()],
            skipped: vec!["Money.php".to_string(), "Status.php".to_string()],
            warnings: 2,
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.stdout,
            vec![
                "Generated (1):",
                "  + Order.php",
                "",
                "Skipped existing (2):",
                "  - Money.php",
                "  - Status.php",
                "",
                "1 file written to out with 2 warnings",
            ]
        );
    }

    #[test]
    fn test_preview_report() {
        let report = PreviewReport {
            files: vec![OutputFile::new("Status.php", "<?php\n", UnitKind::Enum)],
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(out.stdout[0], "── Status.php ──");
        assert_eq!(out.stdout[1], "<?php\n");
        assert_eq!(out.stdout.last().unwrap(), "1 file would be generated");
    }
}
