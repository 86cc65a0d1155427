//! Batch processor module for splitting a list of files
//!
//! - Skips missing inputs with a notice
//! - Isolates failures per file (or stops early with `fail_fast`)
//! - Produces a serializable summary of every outcome

pub mod types;
pub mod core;

pub use types::{
    BatchConfig,
    BatchSummary,
    FileOutcome,
    FileProcessingInfo,
    DEFAULT_INPUT_FILES,
};

pub use self::core::{write_summary, BatchProcessor};
