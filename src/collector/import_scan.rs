use crate::config::ScanConfig;
use crate::error::{CollectError, Result};
use crate::scanner::CandidateFile;
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct CollectProgress {
    pub files_processed: usize,
    pub total_files: usize,
    pub lines_collected: usize,
    pub current_file: Option<String>,
    pub start_time: Instant,
}

impl CollectProgress {
    pub fn new(total_files: usize) -> Self {
        Self {
            files_processed: 0,
            total_files,
            lines_collected: 0,
            current_file: None,
            start_time: Instant::now(),
        }
    }

    pub fn update_file(&mut self, filename: String, lines: usize) {
        self.files_processed += 1;
        self.lines_collected += lines;
        self.current_file = Some(filename);
    }

    pub fn percentage(&self) -> f64 {
        if self.total_files == 0 {
            0.0
        } else {
            (self.files_processed as f64 / self.total_files as f64) * 100.0
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

pub struct ImportScanner {
    prefix: String,
}

impl ImportScanner {
    pub fn new(config: &ScanConfig) -> Self {
        Self {
            prefix: config.import_prefix.clone(),
        }
    }

    /// Read one file and return its trimmed matching lines, top to bottom.
    ///
    /// The file is read whole and decoded strictly; a non-UTF-8 file is a
    /// `Decode` error. The handle is scoped to this call, so the next file
    /// is only opened after this one is released.
    pub fn scan_file(&self, path: &Path) -> Result<Vec<String>> {
        let bytes = fs::read(path).map_err(|err| CollectError::FileRead {
            path: path.display().to_string(),
            source: err,
        })?;

        let text = String::from_utf8(bytes).map_err(|_| CollectError::Decode {
            path: path.display().to_string(),
        })?;

        Ok(text
            .lines()
            .map(str::trim)
            .filter(|line| line.starts_with(&self.prefix))
            .map(str::to_string)
            .collect())
    }

    /// Short-circuiting sequential fold over the candidates: the first file
    /// that fails aborts the whole collection. Lines are accumulated in
    /// candidate order, top to bottom within each file, never deduplicated.
    pub fn collect(
        &self,
        candidates: &[CandidateFile],
        progress_callback: Option<&dyn Fn(&CollectProgress)>,
    ) -> Result<(Vec<String>, CollectProgress)> {
        let mut progress = CollectProgress::new(candidates.len());
        let mut imports = Vec::new();

        for candidate in candidates {
            if let Some(callback) = progress_callback {
                callback(&progress);
            }

            let lines = self.scan_file(&candidate.source_path)?;
            progress.update_file(candidate.filename.clone(), lines.len());
            imports.extend(lines);
        }

        if let Some(callback) = progress_callback {
            callback(&progress);
        }

        Ok((imports, progress))
    }
}
