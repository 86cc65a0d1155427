use super::super::types::*;
use anyhow::{Context, Result};
use arrow::datatypes::SchemaRef;
use arrow::ipc::reader::FileReader;
use arrow::ipc::writer::FileWriter;
use arrow::record_batch::RecordBatch;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Arrow IPC file (Feather v2) reader/writer
pub struct ArrowIpcCodec;

impl ColumnarCodec for ArrowIpcCodec {
    fn read(&self, path: &Path) -> Result<(SchemaRef, Vec<RecordBatch>)> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open {}", path.display()))?;

        let reader = FileReader::try_new(BufReader::new(file), None)
            .with_context(|| format!("{} is not a readable Arrow IPC file", path.display()))?;
        let schema = reader.schema();

        let batches = reader
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("Failed to decode Arrow IPC data in {}", path.display()))?;

        Ok((schema, batches))
    }

    fn write(&self, path: &Path, schema: &SchemaRef, batches: &[RecordBatch]) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;

        let mut writer = FileWriter::try_new(file, schema)
            .with_context(|| format!("Failed to start Arrow IPC writer for {}", path.display()))?;
        for batch in batches {
            writer
                .write(batch)
                .with_context(|| format!("Failed to write rows to {}", path.display()))?;
        }
        writer
            .finish()
            .with_context(|| format!("Failed to finalize {}", path.display()))?;

        Ok(())
    }
}
