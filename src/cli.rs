use crate::config::{CliOverrides, Config};
use crate::error::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "typcollect")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Collect Typst package imports from a directory tree")]
#[command(
    long_about = "Typcollect walks a directory tree, gathers every `#import \"@preview` line \
                       found in .typ files, and writes them to a single output file."
)]
#[command(after_help = "EXAMPLES:\n  \
    typcollect\n  \
    typcollect ./docs\n  \
    typcollect ./docs --output imports.typ\n  \
    typcollect ./docs --output-format json --quiet\n\n\
    For more information, visit: https://github.com/user/typcollect")]
pub struct Cli {
    /// Directory to scan for .typ files
    #[arg(default_value = "./")]
    pub root: PathBuf,

    /// Output file path (defaults to output.typ in the current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format for results
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Verbose output level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// JSON formatted output
    Json,
    /// Plain text output
    Plain,
}

impl Cli {
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::default();

        let overrides = self.create_cli_overrides();
        config.merge_with_cli_args(&overrides);
        config.validate()?;

        Ok(config)
    }

    pub fn create_cli_overrides(&self) -> CliOverrides {
        CliOverrides::new().with_output(self.output.clone())
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose > 0 && !self.quiet
    }

    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }
}
