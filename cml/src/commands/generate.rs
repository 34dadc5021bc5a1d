use std::path::PathBuf;

use clap::Args;
use cmlgen_codegen_php::Generator;
use cmlgen_core::FileRules;
use eyre::{Context, Result};

use super::{ConfigArgs, UnwrapOrExit, load_model};
use crate::reports::{GenerateReport, PreviewReport, Report, TerminalOutput};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the .cml model
    pub model: PathBuf,

    #[command(flatten)]
    pub config: ConfigArgs,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Leave files that already exist untouched
    #[arg(long)]
    pub skip_existing: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let config = self.config.load().unwrap_or_exit();
        let model = load_model(&self.model);

        let ctx = cmlgen_codegen_php::pipeline()
            .run(model, config)
            .wrap_err("Pipeline failed")?;

        let warnings = ctx.warning_count();
        for diag in ctx.warnings() {
            match &diag.location {
                Some(loc) => tracing::warn!("{} (at {})", diag.message, loc),
                None => tracing::warn!("{}", diag.message),
            }
        }

        let generator = Generator::from_context(ctx);
        let mut out = TerminalOutput::new();

        if self.dry_run {
            let files = generator.files().wrap_err("Failed to generate code")?;
            PreviewReport { files }.render(&mut out);
            return Ok(());
        }

        let rules = if self.skip_existing {
            FileRules::skip_existing()
        } else {
            FileRules::default()
        };
        let result = generator
            .write(&self.output, rules)
            .wrap_err("Failed to write generated files")?;

        GenerateReport {
            output_dir: self.output.clone(),
            written: result.written,
            skipped: result.skipped,
            warnings,
        }
        .render(&mut out);

        Ok(())
    }
}
