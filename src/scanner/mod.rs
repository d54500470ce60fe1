pub mod file_filter;
pub mod file_walker;

pub use file_filter::SourceFilter;
pub use file_walker::{CandidateFile, SourceWalker};
