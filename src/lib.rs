//! # Columnar Splitter
//!
//! Splits large columnar data files into numbered parts of approximately
//! bounded size, for consumers with per-file size limits:
//! - File discovery for an explicit list of inputs
//! - Row-count estimation from the source's average row size
//! - Parquet and Arrow IPC readers/writers that preserve the schema
//! - Batch processing with per-file error isolation
//!
//! ## Example Usage
//!
//! ```no_run
//! use columnar_splitter::{FileSplitter, SplitConfig};
//! use std::path::Path;
//!
//! fn main() -> anyhow::Result<()> {
//!     let splitter = FileSplitter::with_config(SplitConfig {
//!         max_size_gb: 1.8,
//!         ..Default::default()
//!     });
//!
//!     let report = splitter.split_file(Path::new("train.parquet"))?;
//!     for chunk in &report.chunks {
//!         println!("{}: {} rows", chunk.path.display(), chunk.num_rows());
//!     }
//!
//!     Ok(())
//! }
//! ```

// Include the modules from the modules directory
#[path = "../modules/mod.rs"]
pub mod modules;

// Re-export everything from modules for easy access
pub use modules::*;

// Re-export commonly used external types for convenience
pub use anyhow::{Result, Context};
pub use tracing;

/// Version information for the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library information
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
