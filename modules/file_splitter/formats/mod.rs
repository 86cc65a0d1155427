//! Columnar format codecs
//!
//! - ParquetCodec: Apache Parquet files
//! - ArrowIpcCodec: Arrow IPC / Feather v2 files

pub mod parquet_format;
pub mod ipc_format;

pub use parquet_format::ParquetCodec;
pub use ipc_format::ArrowIpcCodec;

use super::types::{ColumnarCodec, ColumnarFormat};

/// Pick the codec for a detected format
pub fn codec_for(format: ColumnarFormat) -> Box<dyn ColumnarCodec> {
    match format {
        ColumnarFormat::Parquet => Box::new(ParquetCodec::new()),
        ColumnarFormat::ArrowIpc => Box::new(ArrowIpcCodec),
    }
}
