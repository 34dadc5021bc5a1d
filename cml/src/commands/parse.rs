use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};

use super::load_model;
use crate::reports::{ModelReport, Report, TerminalOutput};

#[derive(Args)]
pub struct ParseCommand {
    /// Path to the .cml model
    pub model: PathBuf,

    /// Print the model as JSON
    #[arg(long)]
    pub json: bool,
}

impl ParseCommand {
    /// Run the parse command
    pub fn run(&self) -> Result<()> {
        let model = load_model(&self.model);

        if self.json {
            let json =
                serde_json::to_string_pretty(&model).wrap_err("Failed to serialize model")?;
            println!("{}", json);
        } else {
            ModelReport { model: &model }.render(&mut TerminalOutput::new());
        }

        Ok(())
    }
}
