use crate::config::ScanConfig;
use std::path::Path;

pub struct SourceFilter {
    suffix: String,
}

impl SourceFilter {
    pub fn new(config: &ScanConfig) -> Self {
        Self {
            suffix: config.suffix(),
        }
    }

    /// Suffix match is case-sensitive: `A.TYP` is not a candidate.
    pub fn is_candidate(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| name.ends_with(&self.suffix))
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }
}

impl Default for SourceFilter {
    fn default() -> Self {
        Self::new(&ScanConfig::default())
    }
}
