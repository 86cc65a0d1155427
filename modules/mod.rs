//! Library for splitting columnar data files
//!
//! This library provides modules for:
//! - Locating the requested input files
//! - Size-bounded splitting of Parquet and Arrow IPC files
//! - Batch processing with per-file error isolation

pub mod file_discovery;
pub mod file_splitter;
pub mod batch_processor;

#[cfg(test)]
pub(crate) mod test_logs;

// Re-export commonly used types and structs
pub use file_discovery::{DiscoveredFile, FileDiscovery, FileInfo, ProcessingSummary};
pub use file_splitter::{
    ChunkInfo, ColumnarCodec, ColumnarFormat, Dataset, FileSplitter, SplitConfig, SplitReport,
};
pub use batch_processor::{BatchConfig, BatchProcessor, BatchSummary, FileOutcome};
