use clap::Parser;
use std::process;
use typcollect::{Cli, CollectError, ImportCollector, OutputFormatter, OutputMode};

fn main() {
    process::exit(run());
}

fn run() -> i32 {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Create collector instance
    let collector = match ImportCollector::from_cli(&cli) {
        Ok(collector) => collector,
        Err(e) => {
            print_startup_error(&e);
            return exit_code_for(&e);
        }
    };

    // Execute the collection pipeline
    match collector.collect_imports(&cli.root) {
        Ok(report) => {
            collector.output_formatter().print_collection_report(&report);
            0
        }
        Err(e) => {
            collector.handle_error(&e);
            exit_code_for(&e)
        }
    }
}

fn exit_code_for(error: &CollectError) -> i32 {
    match error {
        CollectError::Config { .. } => 2,
        CollectError::RootNotFound { .. } | CollectError::Walk { .. } => 3,
        CollectError::Decode { .. } => 4,
        CollectError::OutputWrite { .. } => 5,
        _ => 1, // General error
    }
}

fn print_startup_error(error: &CollectError) {
    // Create a basic formatter for startup errors
    let formatter = OutputFormatter::new(OutputMode::Human, 0, false);
    formatter.print_user_friendly_error(error);
}

#[cfg(test)]
mod tests {
    use super::*;
    use typcollect::UserFriendlyError;

    #[test]
    fn test_exit_code_mapping() {
        assert_eq!(
            exit_code_for(&CollectError::Config {
                message: "bad".to_string()
            }),
            2
        );
        assert_eq!(
            exit_code_for(&CollectError::RootNotFound {
                path: "/gone".to_string()
            }),
            3
        );
        assert_eq!(
            exit_code_for(&CollectError::Decode {
                path: "bad.typ".to_string()
            }),
            4
        );
        assert_eq!(
            exit_code_for(&CollectError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "misc"
            ))),
            1
        );
    }

    #[test]
    fn test_startup_errors_have_suggestions() {
        let error = CollectError::Config {
            message: "File extension must not be empty".to_string(),
        };
        assert!(error.suggestion().is_some());
    }
}
