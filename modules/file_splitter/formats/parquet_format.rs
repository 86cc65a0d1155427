use super::super::types::*;
use anyhow::{Context, Result};
use arrow::datatypes::SchemaRef;
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Parquet reader/writer built on the Arrow integration of the `parquet` crate
pub struct ParquetCodec {
    compression: Compression,
}

impl ParquetCodec {
    /// Create a codec that writes Snappy-compressed files
    pub fn new() -> Self {
        Self {
            compression: Compression::SNAPPY,
        }
    }

    fn writer_props(&self) -> WriterProperties {
        WriterProperties::builder()
            .set_compression(self.compression)
            .build()
    }
}

impl Default for ParquetCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl ColumnarCodec for ParquetCodec {
    fn read(&self, path: &Path) -> Result<(SchemaRef, Vec<RecordBatch>)> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open {}", path.display()))?;

        let builder = ParquetRecordBatchReaderBuilder::try_new(file)
            .with_context(|| format!("{} is not a readable Parquet file", path.display()))?;
        let schema = Arc::clone(builder.schema());
        let num_row_groups = builder.metadata().num_row_groups();

        let reader = builder
            .build()
            .with_context(|| format!("Failed to build Parquet reader for {}", path.display()))?;

        let batches = reader
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("Failed to decode Parquet data in {}", path.display()))?;

        debug!(
            path = %path.display(),
            num_row_groups,
            num_batches = batches.len(),
            "Read Parquet file"
        );

        Ok((schema, batches))
    }

    fn write(&self, path: &Path, schema: &SchemaRef, batches: &[RecordBatch]) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;

        let mut writer = ArrowWriter::try_new(file, Arc::clone(schema), Some(self.writer_props()))
            .with_context(|| format!("Failed to start Parquet writer for {}", path.display()))?;
        for batch in batches {
            writer
                .write(batch)
                .with_context(|| format!("Failed to write rows to {}", path.display()))?;
        }
        writer
            .close()
            .with_context(|| format!("Failed to finalize {}", path.display()))?;

        Ok(())
    }
}
