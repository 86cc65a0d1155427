use super::formats::codec_for;
use super::planner::{chunk_path, estimate_rows_per_chunk, plan_chunks};
use super::types::*;
use anyhow::{Context, Result};
use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Splits a columnar file into numbered parts of approximately bounded size
pub struct FileSplitter {
    config: SplitConfig,
}

impl FileSplitter {
    /// Create a new file splitter with default configuration
    pub fn new() -> Self {
        Self {
            config: SplitConfig::default(),
        }
    }

    /// Create a new file splitter with custom configuration
    pub fn with_config(config: SplitConfig) -> Self {
        Self { config }
    }

    /// Load `input` fully into memory using the codec for its extension
    pub fn load(&self, input: &Path) -> Result<(ColumnarFormat, Dataset)> {
        let format = ColumnarFormat::from_extension(input);
        let codec = codec_for(format);

        let file_bytes = fs::metadata(input)
            .with_context(|| format!("Failed to stat {}", input.display()))?
            .len();
        let (schema, batches) = codec.read(input)?;
        let dataset = Dataset::from_batches(schema, batches, file_bytes)
            .with_context(|| format!("Failed to load {}", input.display()))?;

        debug!(
            path = %input.display(),
            format = format.display_name(),
            file_bytes,
            num_rows = dataset.num_rows(),
            "Loaded dataset"
        );

        Ok((format, dataset))
    }

    /// Split a file on disk, writing `<base>_part_NNN.<ext>` files next to it
    pub fn split_file(&self, input: &Path) -> Result<SplitReport> {
        self.config.validate()?;

        info!("Splitting {}...", input.display());
        let (format, dataset) = self.load(input)?;

        self.split_dataset(input, format, &dataset)
    }

    /// Split an already loaded dataset whose source lives at `input`
    pub fn split_dataset(&self, input: &Path, format: ColumnarFormat, dataset: &Dataset) -> Result<SplitReport> {
        self.config.validate()?;

        let total_rows = dataset.num_rows();
        let rows_per_chunk =
            estimate_rows_per_chunk(total_rows, dataset.file_bytes, self.config.max_bytes());
        let ranges = plan_chunks(total_rows, rows_per_chunk);

        info!("Total rows: {}", total_rows);
        info!("Target rows per chunk: {}", rows_per_chunk);
        info!("Number of chunks: {}", ranges.len());

        if ranges.is_empty() {
            warn!("{} contains no rows, no chunks written", input.display());
        }

        let codec = codec_for(format);
        let mut attempted: Vec<PathBuf> = Vec::with_capacity(ranges.len());
        let mut chunks = Vec::with_capacity(ranges.len());

        for (i, range) in ranges.iter().enumerate() {
            let index = i + 1;
            let output = chunk_path(input, format, index)?;
            attempted.push(output.clone());

            info!(
                "Saving chunk {}/{} to {} ({} rows)",
                index,
                ranges.len(),
                output.display(),
                range.len()
            );

            match self.write_chunk(codec.as_ref(), dataset, range.clone(), &output) {
                Ok(size_bytes) => {
                    let chunk = ChunkInfo {
                        index,
                        path: output,
                        start_row: range.start,
                        end_row: range.end,
                        size_bytes,
                    };
                    info!("  Chunk size: {:.2} GB", chunk.size_gb());
                    chunks.push(chunk);
                }
                Err(e) => {
                    if self.config.cleanup_on_failure {
                        remove_outputs(&attempted);
                    }
                    return Err(e).with_context(|| {
                        format!("Failed to split {} at chunk {}", input.display(), index)
                    });
                }
            }
        }

        info!("Split complete! Created {} files.", chunks.len());

        Ok(SplitReport {
            input: input.to_path_buf(),
            format,
            total_rows,
            source_bytes: dataset.file_bytes,
            rows_per_chunk,
            chunks,
        })
    }

    /// Write one row range and return the resulting file size
    fn write_chunk(
        &self,
        codec: &dyn ColumnarCodec,
        dataset: &Dataset,
        range: Range<usize>,
        output: &Path,
    ) -> Result<u64> {
        codec.write(output, &dataset.schema, &dataset.rows(range))?;

        let size_bytes = fs::metadata(output)
            .with_context(|| format!("Failed to stat written chunk {}", output.display()))?
            .len();
        Ok(size_bytes)
    }
}

impl Default for FileSplitter {
    fn default() -> Self {
        Self::new()
    }
}

/// Best-effort removal of chunk files left by a failed split
fn remove_outputs(paths: &[PathBuf]) {
    for path in paths {
        if !path.is_file() {
            continue;
        }
        match fs::remove_file(path) {
            Ok(()) => info!("Removed partial output {}", path.display()),
            Err(e) => warn!("Failed to remove partial output {}: {}", path.display(), e),
        }
    }
}
