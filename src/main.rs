//! Command-line entry point: split each listed file, skipping missing ones

use anyhow::{bail, Result};
use clap::Parser;
use columnar_splitter::batch_processor::{write_summary, DEFAULT_INPUT_FILES};
use columnar_splitter::file_splitter::DEFAULT_MAX_SIZE_GB;
use columnar_splitter::{BatchConfig, BatchProcessor, SplitConfig};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Split large columnar files into numbered parts of bounded size
#[derive(Debug, Parser)]
#[command(name = "columnar-splitter", version, about)]
struct Cli {
    /// Files to split [default: train.parquet test.parquet]
    #[arg(value_name = "FILES")]
    files: Vec<PathBuf>,

    /// Approximate maximum size of each part, in gigabytes (2^30 bytes)
    #[arg(long, env = "SPLITTER_MAX_SIZE_GB", default_value_t = DEFAULT_MAX_SIZE_GB)]
    max_size_gb: f64,

    /// Stop at the first file that fails to split
    #[arg(long, env = "SPLITTER_FAIL_FAST")]
    fail_fast: bool,

    /// Delete the parts already written for a file whose split fails
    #[arg(long, env = "SPLITTER_CLEANUP_ON_FAILURE")]
    cleanup_on_failure: bool,

    /// Write a JSON summary of the batch to this path
    #[arg(long, value_name = "PATH")]
    summary: Option<PathBuf>,
}

impl Cli {
    fn batch_config(&self) -> BatchConfig {
        let files = if self.files.is_empty() {
            DEFAULT_INPUT_FILES.iter().map(PathBuf::from).collect()
        } else {
            self.files.clone()
        };

        BatchConfig {
            files,
            split: SplitConfig {
                max_size_gb: self.max_size_gb,
                cleanup_on_failure: self.cleanup_on_failure,
            },
            fail_fast: self.fail_fast,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    info!("Columnar Splitter v{}", columnar_splitter::VERSION);

    let summary = BatchProcessor::new(cli.batch_config()).run()?;

    if let Some(path) = &cli.summary {
        write_summary(&summary, path)?;
    }

    if summary.has_failures() {
        bail!(
            "{} of {} files failed to split",
            summary.failed_count(),
            summary.files.len()
        );
    }

    Ok(())
}
