pub mod cli;
pub mod collector;
pub mod config;
pub mod error;
pub mod scanner;
pub mod ui;

// Public API re-exports
pub use cli::{Cli, OutputFormat};
pub use config::{CliOverrides, Config, OutputConfig, ScanConfig};
pub use error::{CollectError, Result, UserFriendlyError};

// Core functionality re-exports
pub use collector::{
    CollectProgress, CollectionReport, ConfigSnapshot, ImportScanner, OutputWriter,
};
pub use scanner::{CandidateFile, SourceFilter, SourceWalker};
pub use ui::{OutputFormatter, OutputMode, ProgressManager};

use std::path::Path;

/// Main library interface for import collection
pub struct ImportCollector {
    config: Config,
    output_formatter: OutputFormatter,
    progress_manager: ProgressManager,
}

impl ImportCollector {
    /// Create a new ImportCollector instance with the provided configuration
    pub fn new(config: Config, output_mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        let output_formatter = OutputFormatter::new(output_mode, verbose, quiet);
        let progress_manager = ProgressManager::new(!quiet && output_mode == OutputMode::Human);

        Self {
            config,
            output_formatter,
            progress_manager,
        }
    }

    /// Create an ImportCollector instance from CLI arguments
    pub fn from_cli(cli_args: &Cli) -> Result<Self> {
        let config = cli_args.load_config()?;
        let output_mode = match cli_args.output_format {
            crate::cli::OutputFormat::Human => OutputMode::Human,
            crate::cli::OutputFormat::Json => OutputMode::Json,
            crate::cli::OutputFormat::Plain => OutputMode::Plain,
        };

        Ok(Self::new(
            config,
            output_mode,
            cli_args.verbose,
            cli_args.quiet,
        ))
    }

    /// Collect import lines from every candidate file under `root` and write
    /// them to the configured output file.
    ///
    /// The pipeline is one synchronous pass: walk, scan, write. The first
    /// error anywhere aborts the run; an empty collection is a success and
    /// produces an empty output file.
    pub fn collect_imports(&self, root: &Path) -> Result<CollectionReport> {
        self.output_formatter
            .start_operation("Collecting Typst package imports");

        // Step 1: enumerate candidate files
        let candidates = self.scan_sources(root)?;
        self.output_formatter
            .info(&format!("Found {} candidate files", candidates.len()));
        let total_bytes: u64 = candidates.iter().map(|c| c.size).sum();
        self.output_formatter
            .debug(&format!("{} bytes of Typst source to scan", total_bytes));

        // Step 2: scan candidates for import lines
        let (imports, progress) = self.scan_imports(&candidates)?;

        // Step 3: write the output file
        let writer = OutputWriter::new(&self.config.output.path);
        writer.write(&imports)?;
        self.output_formatter.success(&format!(
            "Wrote {} imports to {}",
            imports.len(),
            writer.path().display()
        ));

        let report = CollectionReport::new(root, &self.config, &progress);
        self.output_formatter.print_collection_summary(&progress);

        Ok(report)
    }

    /// Walk the tree with a spinner
    fn scan_sources(&self, root: &Path) -> Result<Vec<CandidateFile>> {
        let spinner = self
            .progress_manager
            .create_spinner("Scanning for Typst sources");

        let walker = SourceWalker::new(&self.config.scan);
        let result = walker.walk(root);

        spinner.finish_and_clear();
        result
    }

    /// Scan candidate files with per-file progress
    fn scan_imports(&self, candidates: &[CandidateFile]) -> Result<(Vec<String>, CollectProgress)> {
        let file_progress = self
            .progress_manager
            .create_file_progress(candidates.len() as u64);
        let progress_callback = {
            let pb = file_progress.clone();
            move |progress: &CollectProgress| {
                ui::progress::update_file_progress(&pb, progress);
            }
        };

        let scanner = ImportScanner::new(&self.config.scan);
        let result = scanner.collect(candidates, Some(&progress_callback));

        match &result {
            Ok((imports, progress)) => {
                ui::progress::finish_progress_with_summary(
                    &file_progress,
                    &format!("Collected {} imports", imports.len()),
                    progress.elapsed(),
                );
            }
            Err(_) => file_progress.abandon(),
        }

        result
    }

    /// Get configuration reference
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get output formatter reference
    pub fn output_formatter(&self) -> &OutputFormatter {
        &self.output_formatter
    }

    /// Get progress manager reference
    pub fn progress_manager(&self) -> &ProgressManager {
        &self.progress_manager
    }

    /// Handle error with user-friendly output
    pub fn handle_error(&self, error: &CollectError) {
        self.progress_manager.clear();
        self.output_formatter.print_user_friendly_error(error);
    }
}

/// Convenience function to collect imports with minimal setup
pub fn collect_imports_simple(
    root: &Path,
    output: Option<&Path>,
    verbose: bool,
) -> Result<CollectionReport> {
    let mut config = Config::default();

    if let Some(output_path) = output {
        config.output.path = output_path.to_path_buf();
    }
    config.validate()?;

    let collector = ImportCollector::new(
        config,
        OutputMode::Plain,
        if verbose { 1 } else { 0 },
        !verbose,
    );

    collector.collect_imports(root)
}

/// Get version information
pub fn version_info() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
