//! Core batch processing logic

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::{error, info, warn};

use crate::{DiscoveredFile, FileDiscovery, FileSplitter};
use super::types::{BatchConfig, BatchSummary, FileOutcome, FileProcessingInfo};

/// Runs the splitter over a list of files
///
/// Each file is handled on its own: a missing file is skipped and a failing
/// file is recorded, then the batch moves on unless `fail_fast` is set.
pub struct BatchProcessor {
    splitter: FileSplitter,
    config: BatchConfig,
}

impl BatchProcessor {
    pub fn new(config: BatchConfig) -> Self {
        let splitter = FileSplitter::with_config(config.split.clone());

        Self { splitter, config }
    }

    /// Process every configured file in order
    pub fn run(&self) -> Result<BatchSummary> {
        let start_time = Instant::now();
        self.config.split.validate()?;

        info!("Processing {} files", self.config.files.len());
        let discovered = FileDiscovery::discover(&self.config.files);
        info!(
            "{}",
            FileDiscovery::generate_processing_summary(&discovered).format_summary()
        );

        let mut files = Vec::with_capacity(discovered.len());
        let mut aborted = false;

        for file in &discovered {
            let path = file.path();
            let outcome = self.process_single_file(file);
            let failed = matches!(outcome, FileOutcome::Failed { .. });

            files.push(FileProcessingInfo {
                file_path: path.to_path_buf(),
                outcome,
            });

            if failed && self.config.fail_fast {
                warn!("Stopping batch after failure in {}", path.display());
                aborted = true;
                break;
            }
        }

        let summary = BatchSummary {
            files,
            aborted,
            processing_time_ms: u64::try_from(start_time.elapsed().as_millis()).unwrap_or(u64::MAX),
        };

        info!(
            "Batch finished in {} ms: {} split, {} skipped, {} failed, {} chunks created",
            summary.processing_time_ms,
            summary.split_count(),
            summary.skipped_count(),
            summary.failed_count(),
            summary.chunks_created()
        );

        Ok(summary)
    }

    fn process_single_file(&self, file: &DiscoveredFile) -> FileOutcome {
        match file {
            DiscoveredFile::Missing(path) => {
                info!("File {} not found, skipping...", path.display());
                FileOutcome::Skipped
            }
            DiscoveredFile::Unreadable { path, error } => {
                error!("Failed to split {}: {}", path.display(), error);
                FileOutcome::Failed {
                    error: error.clone(),
                }
            }
            DiscoveredFile::Present(info) => match self.splitter.split_file(&info.path) {
                Ok(report) => FileOutcome::Split { report },
                Err(e) => {
                    error!("Failed to split {}: {:#}", info.path.display(), e);
                    FileOutcome::Failed {
                        error: format!("{:#}", e),
                    }
                }
            },
        }
    }
}

/// Write the summary as pretty-printed JSON
pub fn write_summary(summary: &BatchSummary, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(summary)
        .context("Failed to serialize batch summary to JSON")?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write batch summary to {}", path.display()))?;

    info!("Wrote batch summary to {}", path.display());
    Ok(())
}
