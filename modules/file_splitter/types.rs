use anyhow::{bail, Context, Result};
use arrow::datatypes::SchemaRef;
use arrow::record_batch::RecordBatch;
use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Number of bytes in one gigabyte as used for chunk size limits (2^30)
pub const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Default maximum chunk size, kept under common 2 GB per-file limits
pub const DEFAULT_MAX_SIZE_GB: f64 = 1.8;

/// Configuration for file splitting operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Approximate upper bound for each output chunk, in gigabytes
    pub max_size_gb: f64,
    /// Remove chunk files already written for an input when its split fails
    pub cleanup_on_failure: bool,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            max_size_gb: DEFAULT_MAX_SIZE_GB,
            cleanup_on_failure: false,
        }
    }
}

impl SplitConfig {
    /// Maximum chunk size in bytes
    pub fn max_bytes(&self) -> f64 {
        self.max_size_gb * BYTES_PER_GB
    }

    /// Reject sizes that would make the row estimate meaningless
    pub fn validate(&self) -> Result<()> {
        if !self.max_size_gb.is_finite() || self.max_size_gb <= 0.0 {
            bail!(
                "max_size_gb must be a positive, finite number (got {})",
                self.max_size_gb
            );
        }
        Ok(())
    }
}

/// Columnar file formats the splitter can read and write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnarFormat {
    Parquet,
    ArrowIpc,
}

impl ColumnarFormat {
    /// Detect the format from the file extension.
    ///
    /// Unknown or missing extensions are treated as Parquet.
    pub fn from_extension(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match ext.as_deref() {
            Some("arrow") | Some("feather") | Some("ipc") => ColumnarFormat::ArrowIpc,
            Some("parquet") | Some("parq") | Some("pq") => ColumnarFormat::Parquet,
            _ => ColumnarFormat::Parquet,
        }
    }

    /// Extension used for outputs when the input has none
    pub fn canonical_extension(&self) -> &'static str {
        match self {
            ColumnarFormat::Parquet => "parquet",
            ColumnarFormat::ArrowIpc => "arrow",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ColumnarFormat::Parquet => "Parquet",
            ColumnarFormat::ArrowIpc => "Arrow IPC",
        }
    }
}

/// A source file loaded fully into memory
///
/// Batches are kept as decoded rather than concatenated: a single string
/// column past `i32::MAX` bytes cannot be held in one `RecordBatch`.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Schema of the source file, including its metadata
    pub schema: SchemaRef,
    /// Non-empty batches of the source, in row order
    batches: Vec<RecordBatch>,
    /// First dataset row of each entry in `batches`
    batch_starts: Vec<usize>,
    num_rows: usize,
    /// On-disk size of the source file
    pub file_bytes: u64,
}

impl Dataset {
    /// Hold the batches read from a file as one dataset under the file schema
    pub fn from_batches(schema: SchemaRef, batches: Vec<RecordBatch>, file_bytes: u64) -> Result<Self> {
        let mut kept = Vec::with_capacity(batches.len());
        let mut batch_starts = Vec::with_capacity(batches.len());
        let mut num_rows = 0;

        for batch in batches.into_iter().filter(|b| b.num_rows() > 0) {
            // Decoders may drop schema metadata from the batches they yield
            let batch = batch
                .with_schema(Arc::clone(&schema))
                .context("Record batch does not match the file schema")?;
            batch_starts.push(num_rows);
            num_rows += batch.num_rows();
            kept.push(batch);
        }

        Ok(Self {
            schema,
            batches: kept,
            batch_starts,
            num_rows,
            file_bytes,
        })
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Zero-copy slices of the source batches covering a contiguous row range
    pub fn rows(&self, range: Range<usize>) -> Vec<RecordBatch> {
        let end = range.end.min(self.num_rows);
        if range.start >= end {
            return Vec::new();
        }

        let first = self.batch_starts.partition_point(|&start| start <= range.start) - 1;
        let mut slices = Vec::new();

        for (batch, &batch_start) in self.batches[first..].iter().zip(&self.batch_starts[first..]) {
            if batch_start >= end {
                break;
            }
            let offset = range.start.saturating_sub(batch_start);
            let len = (end - batch_start).min(batch.num_rows()) - offset;
            slices.push(batch.slice(offset, len));
        }

        slices
    }
}

/// Information about one written chunk file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkInfo {
    /// 1-based chunk index, as used in the file name
    pub index: usize,
    pub path: PathBuf,
    /// First row of the source included in this chunk
    pub start_row: usize,
    /// One past the last row of the source included in this chunk
    pub end_row: usize,
    pub size_bytes: u64,
}

impl ChunkInfo {
    pub fn num_rows(&self) -> usize {
        self.end_row - self.start_row
    }

    pub fn size_gb(&self) -> f64 {
        self.size_bytes as f64 / BYTES_PER_GB
    }
}

/// Result of splitting a single source file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitReport {
    pub input: PathBuf,
    pub format: ColumnarFormat,
    pub total_rows: usize,
    pub source_bytes: u64,
    pub rows_per_chunk: usize,
    pub chunks: Vec<ChunkInfo>,
}

impl SplitReport {
    pub fn num_chunks(&self) -> usize {
        self.chunks.len()
    }

    pub fn total_output_bytes(&self) -> u64 {
        self.chunks.iter().map(|c| c.size_bytes).sum()
    }
}

/// Reader/writer for one columnar file format
pub trait ColumnarCodec {
    /// Read every record batch of the file along with its schema
    fn read(&self, path: &Path) -> Result<(SchemaRef, Vec<RecordBatch>)>;

    /// Write the batches, in order, as one standalone file, creating or
    /// truncating `path`
    fn write(&self, path: &Path, schema: &SchemaRef, batches: &[RecordBatch]) -> Result<()>;
}
