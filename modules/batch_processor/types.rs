//! Types and data structures for the batch processor module

use crate::file_splitter::{SplitConfig, SplitReport};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Inputs processed when no explicit list is given
pub const DEFAULT_INPUT_FILES: [&str; 2] = ["train.parquet", "test.parquet"];

/// Configuration for a batch of splits
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BatchConfig {
    /// Files to split, processed in order
    pub files: Vec<PathBuf>,
    pub split: SplitConfig,
    /// Stop at the first file that fails instead of moving on
    pub fail_fast: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            files: DEFAULT_INPUT_FILES.iter().map(PathBuf::from).collect(),
            split: SplitConfig::default(),
            fail_fast: false,
        }
    }
}

/// What happened to one requested file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    Split { report: SplitReport },
    Skipped,
    Failed { error: String },
}

/// Information about processing a single file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileProcessingInfo {
    pub file_path: PathBuf,
    #[serde(flatten)]
    pub outcome: FileOutcome,
}

/// Complete result from a batch run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    pub files: Vec<FileProcessingInfo>,
    /// Set when `fail_fast` stopped the batch before every file was tried
    pub aborted: bool,
    pub processing_time_ms: u64,
}

impl BatchSummary {
    pub fn split_count(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Split { .. }))
    }

    pub fn skipped_count(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Skipped))
    }

    pub fn failed_count(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Failed { .. }))
    }

    pub fn has_failures(&self) -> bool {
        self.failed_count() > 0
    }

    pub fn chunks_created(&self) -> usize {
        self.files
            .iter()
            .map(|f| match &f.outcome {
                FileOutcome::Split { report } => report.num_chunks(),
                _ => 0,
            })
            .sum()
    }

    fn count(&self, pred: impl Fn(&FileOutcome) -> bool) -> usize {
        self.files.iter().filter(|f| pred(&f.outcome)).count()
    }
}
