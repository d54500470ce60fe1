pub mod import_scan;
pub mod output_writer;

pub use import_scan::{CollectProgress, ImportScanner};
pub use output_writer::{CollectionReport, ConfigSnapshot, OutputWriter};
