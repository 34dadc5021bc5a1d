mod check;
mod completions;
mod generate;
mod parse;

use std::path::{Path, PathBuf};

use check::CheckCommand;
use clap::{Args, Parser, Subcommand};
use cmlgen_config::{
    CONFIG_FILE_NAME, DirectoryStructure, Framework, GeneratorConfig, PhpVersion, SourceContext,
};
use cmlgen_ir::Model;
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use parse::ParseCommand;

/// Extension trait for exiting on config or model errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T, E> UnwrapOrExit<T> for std::result::Result<T, Box<E>>
where
    E: miette::Diagnostic + Send + Sync + 'static,
{
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "cmlgen")]
#[command(version)]
#[command(about = "Generate PHP domain classes from CML models")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Parse(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate PHP classes from a CML model
    Generate(GenerateCommand),

    /// Validate a model and configuration without generating code
    Check(CheckCommand),

    /// Print the parsed model
    Parse(ParseCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Configuration file and command-line overrides shared by commands that
/// run the pipeline.
#[derive(Args, Debug, Default)]
pub(crate) struct ConfigArgs {
    /// Path to cmlgen.toml (defaults to ./cmlgen.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Framework flavour (overrides cmlgen.toml)
    #[arg(long)]
    pub framework: Option<Framework>,

    /// Target PHP version (overrides cmlgen.toml)
    #[arg(long)]
    pub php_version: Option<PhpVersion>,

    /// Directory structure (overrides cmlgen.toml)
    #[arg(long)]
    pub layout: Option<DirectoryStructure>,

    /// Namespace prefix (overrides cmlgen.toml)
    #[arg(long)]
    pub namespace: Option<String>,
}

impl ConfigArgs {
    /// Path of the configuration file in use, if any.
    pub fn config_path(&self) -> Option<PathBuf> {
        match &self.config {
            Some(path) => Some(path.clone()),
            None => {
                let default = PathBuf::from(CONFIG_FILE_NAME);
                default.exists().then_some(default)
            }
        }
    }

    /// Load the configuration and apply the overrides.
    ///
    /// An explicit `--config` must exist; the implicit one is optional.
    pub fn load(&self) -> cmlgen_config::Result<GeneratorConfig> {
        let mut config = match self.config_path() {
            Some(path) => {
                tracing::info!("loading configuration from {}", path.display());
                GeneratorConfig::from_file(&path)?
            }
            None => {
                tracing::info!("no {} found, using defaults", CONFIG_FILE_NAME);
                GeneratorConfig::default()
            }
        };

        if let Some(framework) = self.framework {
            config.framework = framework;
        }
        if let Some(php_version) = self.php_version {
            config.php_version = php_version;
        }
        if let Some(layout) = self.layout {
            config.directory_structure = layout;
        }
        if let Some(namespace) = &self.namespace {
            config.namespace = namespace.clone();
            config.validate(&SourceContext::new(
                format!("--namespace \"{}\"", namespace),
                "<command line>",
            ))?;
        }

        Ok(config)
    }
}

/// Read and parse a model file, exiting with a report when it cannot be read.
pub(crate) fn load_model(path: &Path) -> Model {
    let model = cmlgen_syntax::parse_file(path).unwrap_or_exit();
    tracing::info!(units = model.unit_count(), "parsed {}", path.display());
    model
}
