use crate::collector::CollectProgress;
use crate::config::Config;
use crate::error::{CollectError, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub struct OutputWriter {
    path: PathBuf,
}

impl OutputWriter {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create or truncate the output file and write one line per import,
    /// newline-terminated, in sequence order. Zero lines produce an empty
    /// file, not an error. A write failure may leave a partial file behind.
    pub fn write(&self, lines: &[String]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|err| self.write_error(err))?;
            }
        }

        let file = fs::File::create(&self.path).map_err(|err| self.write_error(err))?;
        let mut writer = BufWriter::new(file);

        for line in lines {
            writeln!(writer, "{}", line).map_err(|err| self.write_error(err))?;
        }

        writer.flush().map_err(|err| self.write_error(err))
    }

    fn write_error(&self, source: std::io::Error) -> CollectError {
        CollectError::OutputWrite {
            path: self.path.display().to_string(),
            source,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CollectionReport {
    pub root: String,
    pub output_path: String,
    pub files_scanned: usize,
    pub imports_collected: usize,
    pub duration: Duration,
    pub generated_at: DateTime<Utc>,
    pub config_used: ConfigSnapshot,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigSnapshot {
    pub extension: String,
    pub import_prefix: String,
}

impl ConfigSnapshot {
    pub fn from_config(config: &Config) -> Self {
        Self {
            extension: config.scan.extension.clone(),
            import_prefix: config.scan.import_prefix.clone(),
        }
    }
}

impl CollectionReport {
    pub fn new(root: &Path, config: &Config, progress: &CollectProgress) -> Self {
        Self {
            root: root.display().to_string(),
            output_path: config.output.path.display().to_string(),
            files_scanned: progress.files_processed,
            imports_collected: progress.lines_collected,
            duration: progress.elapsed(),
            generated_at: Utc::now(),
            config_used: ConfigSnapshot::from_config(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_newline_terminated_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("output.typ");

        let writer = OutputWriter::new(&path);
        writer
            .write(&[
                "#import \"@preview/foo:1.0\"".to_string(),
                "#import \"@preview/bar:2.0\"".to_string(),
            ])
            .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "#import \"@preview/foo:1.0\"\n#import \"@preview/bar:2.0\"\n"
        );
    }

    #[test]
    fn test_write_truncates_previous_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("output.typ");
        fs::write(&path, "stale content that should disappear\n").unwrap();

        let writer = OutputWriter::new(&path);
        writer
            .write(&["#import \"@preview/foo:1.0\"".to_string()])
            .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "#import \"@preview/foo:1.0\"\n");
    }

    #[test]
    fn test_write_empty_list_produces_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("output.typ");

        let writer = OutputWriter::new(&path);
        writer.write(&[]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.is_empty());
    }

    #[test]
    fn test_write_creates_missing_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("deep").join("output.typ");

        let writer = OutputWriter::new(&path);
        writer.write(&["#import \"@preview/foo:1.0\"".to_string()]).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_report_serializes_to_json() {
        let config = Config::default();
        let mut progress = CollectProgress::new(2);
        progress.update_file("a.typ".to_string(), 1);
        progress.update_file("b.typ".to_string(), 2);

        let report = CollectionReport::new(Path::new("./docs"), &config, &progress);
        let json = serde_json::to_string(&report).unwrap();

        assert!(json.contains("\"files_scanned\":2"));
        assert!(json.contains("\"imports_collected\":3"));
        assert!(json.contains("\"extension\":\"typ\""));
    }
}
