use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};

use super::{ConfigArgs, UnwrapOrExit, load_model};
use crate::reports::{CheckReport, Report, TerminalOutput, UnitCounts};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the .cml model
    pub model: PathBuf,

    #[command(flatten)]
    pub config: ConfigArgs,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let config = self.config.load().unwrap_or_exit();
        let model = load_model(&self.model);
        let counts = UnitCounts::from_model(&model);

        let ctx = cmlgen_codegen_php::pipeline()
            .run(model, config)
            .wrap_err("Validation failed")?;

        let report = CheckReport {
            model_path: self.model.clone(),
            config_path: self.config.config_path(),
            diagnostics: ctx.diagnostics,
            counts,
        };
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
