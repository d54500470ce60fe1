use crate::error::{CollectError, Result};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize)]
pub struct Config {
    pub scan: ScanConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScanConfig {
    pub extension: String,
    pub import_prefix: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct OutputConfig {
    pub path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scan: ScanConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extension: "typ".to_string(),
            import_prefix: "#import \"@preview".to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("output.typ"),
        }
    }
}

impl ScanConfig {
    /// Filename suffix candidates must carry, dot included.
    pub fn suffix(&self) -> String {
        format!(".{}", self.extension)
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn merge_with_cli_args(&mut self, cli_args: &CliOverrides) {
        if let Some(ref output_path) = cli_args.output {
            self.output.path = output_path.clone();
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.scan.extension.is_empty() {
            return Err(CollectError::Config {
                message: "File extension must not be empty".to_string(),
            });
        }

        // The suffix dot is implied; a leading dot would double it.
        if self.scan.extension.starts_with('.') {
            return Err(CollectError::Config {
                message: format!(
                    "File extension must not start with a dot: {}",
                    self.scan.extension
                ),
            });
        }

        if self.scan.import_prefix.is_empty() {
            return Err(CollectError::Config {
                message: "Import prefix must not be empty".to_string(),
            });
        }

        if self.output.path.file_name().is_none() {
            return Err(CollectError::Config {
                message: format!(
                    "Output path has no file name: {}",
                    self.output.path.display()
                ),
            });
        }

        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub output: Option<PathBuf>,
}

impl CliOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }
}
