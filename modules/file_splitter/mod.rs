//! File Splitter Library
//!
//! Splits a columnar data file (Parquet or Arrow IPC) into numbered parts
//! whose on-disk size approximates a configured maximum. The row count per
//! part is estimated from the source's average row size.

pub mod types;
pub mod planner;
pub mod formats;
pub mod splitter;

// Re-export main types and the FileSplitter
pub use types::*;
pub use planner::{chunk_count, chunk_path, estimate_rows_per_chunk, plan_chunks};
pub use splitter::FileSplitter;

#[cfg(test)]
pub(crate) mod test_data;

#[cfg(test)]
mod tests;
