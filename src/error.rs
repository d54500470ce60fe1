use thiserror::Error;

#[derive(Error, Debug)]
pub enum CollectError {
    #[error("Root directory not found or not a directory: {path}")]
    RootNotFound { path: String },

    #[error("Failed to traverse {path}")]
    Walk {
        path: String,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to read file: {path}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File is not valid UTF-8: {path}")]
    Decode { path: String },

    #[error("Failed to write output file: {path}")]
    OutputWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for CollectError {
    fn user_message(&self) -> String {
        match self {
            CollectError::RootNotFound { path } => {
                format!("Root directory not found: {}", path)
            }
            CollectError::Walk { path, .. } => {
                format!("Could not traverse directory: {}", path)
            }
            CollectError::FileRead { path, .. } => {
                format!("Could not read file: {}", path)
            }
            CollectError::Decode { path } => {
                format!("File is not valid UTF-8 text: {}", path)
            }
            CollectError::OutputWrite { path, .. } => {
                format!("Could not write output file: {}", path)
            }
            CollectError::Config { message } => {
                format!("Configuration error: {}", message)
            }
            _ => self.to_string(),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            CollectError::RootNotFound { .. } => Some(
                "Check that the path exists and is a directory (e.g., typcollect ./docs)."
                    .to_string(),
            ),
            CollectError::Walk { .. } => Some(
                "Ensure you have read permission for every directory under the scanned root."
                    .to_string(),
            ),
            CollectError::FileRead { .. } => Some(
                "Ensure the file is readable and not locked by another process.".to_string(),
            ),
            CollectError::Decode { .. } => Some(
                "Typst sources must be UTF-8 encoded. Re-encode the file or move it out of the scanned tree."
                    .to_string(),
            ),
            CollectError::OutputWrite { .. } => Some(
                "Check write permission and free disk space for the output location, or pick another path with --output."
                    .to_string(),
            ),
            CollectError::Config { .. } => Some(
                "Check the command-line arguments; run with --help for usage.".to_string(),
            ),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CollectError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_friendly_messages() {
        let error = CollectError::RootNotFound {
            path: "/no/such/dir".to_string(),
        };
        assert!(error.user_message().contains("Root directory not found"));
        assert!(error.suggestion().is_some());
    }

    #[test]
    fn test_decode_error_names_the_file() {
        let error = CollectError::Decode {
            path: "notes/bad.typ".to_string(),
        };
        assert!(error.user_message().contains("notes/bad.typ"));
        assert!(error.suggestion().unwrap().contains("UTF-8"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::Other, "test error");
        let error = CollectError::from(io_error);
        assert!(matches!(error, CollectError::Io(_)));
    }
}
