use crate::config::ScanConfig;
use crate::error::{CollectError, Result};
use crate::scanner::file_filter::SourceFilter;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct CandidateFile {
    pub source_path: PathBuf,
    pub relative_path: PathBuf,
    pub filename: String,
    pub size: u64,
}

impl CandidateFile {
    pub fn new(source_path: PathBuf, relative_path: PathBuf, size: u64) -> Self {
        let filename = source_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("")
            .to_string();

        Self {
            source_path,
            relative_path,
            filename,
            size,
        }
    }

    pub fn display_path(&self) -> String {
        self.relative_path.display().to_string()
    }
}

pub struct SourceWalker {
    filter: SourceFilter,
}

impl SourceWalker {
    pub fn new(config: &ScanConfig) -> Self {
        Self {
            filter: SourceFilter::new(config),
        }
    }

    /// Enumerate candidate files under `root`, recursively, arbitrary depth.
    ///
    /// Every directory is traversed, hidden ones included. A traversal error
    /// aborts the walk; there is no per-entry recovery. An empty result is
    /// not an error.
    pub fn walk<P: AsRef<Path>>(&self, root: P) -> Result<Vec<CandidateFile>> {
        let root_path = root.as_ref();

        if !root_path.is_dir() {
            return Err(CollectError::RootNotFound {
                path: root_path.display().to_string(),
            });
        }

        let mut candidates = Vec::new();

        for entry in WalkDir::new(root_path).follow_links(false) {
            let entry = entry.map_err(|err| {
                let path = err
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| root_path.display().to_string());
                CollectError::Walk { path, source: err }
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            if !self.filter.is_candidate(entry.path()) {
                continue;
            }

            let metadata = entry.metadata().map_err(|err| CollectError::Walk {
                path: entry.path().display().to_string(),
                source: err,
            })?;

            let relative_path = self.relative_path(entry.path(), root_path);
            candidates.push(CandidateFile::new(
                entry.path().to_path_buf(),
                relative_path,
                metadata.len(),
            ));
        }

        // Visitation order is pinned to sorted relative paths so repeated
        // runs produce byte-identical output.
        candidates.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));

        Ok(candidates)
    }

    fn relative_path(&self, file_path: &Path, root_path: &Path) -> PathBuf {
        file_path
            .strip_prefix(root_path)
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|_| file_path.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_candidate_file_creation() {
        let candidate = CandidateFile::new(
            PathBuf::from("/tree/docs/main.typ"),
            PathBuf::from("docs/main.typ"),
            42,
        );

        assert_eq!(candidate.filename, "main.typ");
        assert_eq!(candidate.size, 42);
        assert_eq!(candidate.display_path(), "docs/main.typ");
    }

    #[test]
    fn test_walk_finds_nested_candidates() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        let sub = root.join("sub");
        fs::create_dir(&sub).unwrap();

        fs::write(root.join("a.typ"), "#import \"@preview/foo:1.0\"\n").unwrap();
        fs::write(sub.join("c.typ"), "// comment\n").unwrap();
        fs::write(root.join("b.txt"), "#import \"@preview/bar:1.0\"\n").unwrap();

        let walker = SourceWalker::new(&ScanConfig::default());
        let candidates = walker.walk(root).unwrap();

        let names: Vec<_> = candidates.iter().map(|c| c.display_path()).collect();
        assert_eq!(names, vec!["a.typ", "sub/c.typ"]);
    }

    #[test]
    fn test_walk_visits_hidden_directories() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        let hidden = root.join(".cache");
        fs::create_dir(&hidden).unwrap();
        fs::write(hidden.join("stash.typ"), "").unwrap();

        let walker = SourceWalker::new(&ScanConfig::default());
        let candidates = walker.walk(root).unwrap();

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].filename, "stash.typ");
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let walker = SourceWalker::new(&ScanConfig::default());
        let result = walker.walk("/no/such/directory");

        assert!(matches!(result, Err(CollectError::RootNotFound { .. })));
    }

    #[test]
    fn test_file_as_root_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("plain.typ");
        fs::write(&file_path, "").unwrap();

        let walker = SourceWalker::new(&ScanConfig::default());
        let result = walker.walk(&file_path);

        assert!(matches!(result, Err(CollectError::RootNotFound { .. })));
    }

    #[test]
    fn test_empty_tree_yields_empty_list() {
        let temp_dir = TempDir::new().unwrap();

        let walker = SourceWalker::new(&ScanConfig::default());
        let candidates = walker.walk(temp_dir.path()).unwrap();

        assert!(candidates.is_empty());
    }
}
