use super::*;

#[cfg(test)]
mod integration_tests {
    use super::*;
    use super::super::formats::{codec_for, ArrowIpcCodec, ParquetCodec};
    use super::super::test_data::{sample_batch, sample_schema};
    use arrow::array::Int64Array;
    use arrow::compute::concat_batches;
    use arrow::datatypes::{DataType, Field, Schema};
    use arrow::record_batch::RecordBatch;
    use std::path::{Path, PathBuf};
    use std::sync::Arc;
    use tempfile::TempDir;

    const GB: u64 = 1 << 30;

    /// Read every chunk back and stitch them together in index order
    fn reassemble(report: &SplitReport) -> RecordBatch {
        let codec = codec_for(report.format);
        let mut schema = None;
        let mut batches = Vec::new();
        for chunk in &report.chunks {
            let (chunk_schema, chunk_batches) = codec.read(&chunk.path).unwrap();
            assert_eq!(
                chunk_batches.iter().map(|b| b.num_rows()).sum::<usize>(),
                chunk.num_rows()
            );
            schema.get_or_insert(chunk_schema);
            batches.extend(chunk_batches);
        }
        concat_batches(&schema.unwrap(), &batches).unwrap()
    }

    #[test]
    fn test_two_gigabyte_scenario() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let input = temp_dir.path().join("data.parquet");

        let schema = Arc::new(Schema::new(vec![Field::new("v", DataType::Int64, false)]));
        let values = Int64Array::from_iter_values(0..1_000_000);
        let batch = RecordBatch::try_new(Arc::clone(&schema), vec![Arc::new(values)]).unwrap();
        let dataset = Dataset::from_batches(schema, vec![batch.clone()], 2 * GB).unwrap();

        let report = FileSplitter::new()
            .split_dataset(&input, ColumnarFormat::Parquet, &dataset)
            .unwrap();

        assert_eq!(report.rows_per_chunk, 900_000);
        assert_eq!(report.num_chunks(), 2);
        assert_eq!(report.chunks[0].num_rows(), 900_000);
        assert_eq!(report.chunks[1].num_rows(), 100_000);
        assert_eq!(report.chunks[0].path, temp_dir.path().join("data_part_001.parquet"));
        assert_eq!(report.chunks[1].path, temp_dir.path().join("data_part_002.parquet"));

        let rebuilt = reassemble(&report);
        assert_eq!(rebuilt.column(0), batch.column(0));
    }

    #[test]
    fn test_chunks_reconstruct_source_exactly() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let input = temp_dir.path().join("train.parquet");

        let parts = [sample_batch(0, 700), sample_batch(700, 600), sample_batch(1300, 45)];
        ParquetCodec::new().write(&input, &sample_schema(), &parts).unwrap();
        let source = concat_batches(&sample_schema(), &parts).unwrap();

        let file_bytes = std::fs::metadata(&input).unwrap().len();
        let config = SplitConfig {
            max_size_gb: file_bytes as f64 / 3.0 / BYTES_PER_GB,
            ..Default::default()
        };
        let report = FileSplitter::with_config(config).split_file(&input).unwrap();

        assert_eq!(report.total_rows, 1345);
        assert_eq!(report.num_chunks(), chunk_count(1345, report.rows_per_chunk));
        assert!(report.num_chunks() >= 3);

        let last = report.chunks.last().unwrap();
        assert_eq!(
            last.num_rows(),
            1345 - (report.num_chunks() - 1) * report.rows_per_chunk
        );

        let rebuilt = reassemble(&report);
        assert_eq!(rebuilt.schema().fields(), source.schema().fields());
        assert_eq!(rebuilt.columns(), source.columns());
    }

    #[test]
    fn test_chunks_span_source_batch_boundaries() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let input = temp_dir.path().join("multi.parquet");

        // Source rows stay split across three batches; chunks of 336 rows
        // straddle the boundaries at rows 700 and 1300
        let parts = vec![sample_batch(0, 700), sample_batch(700, 600), sample_batch(1300, 45)];
        let dataset = Dataset::from_batches(sample_schema(), parts.clone(), GB).unwrap();

        let report = FileSplitter::with_config(SplitConfig {
            max_size_gb: 0.25,
            ..Default::default()
        })
        .split_dataset(&input, ColumnarFormat::Parquet, &dataset)
        .unwrap();

        assert_eq!(report.rows_per_chunk, 336);
        assert_eq!(
            report.chunks.iter().map(|c| c.num_rows()).collect::<Vec<_>>(),
            vec![336, 336, 336, 336, 1]
        );

        let source = concat_batches(&sample_schema(), &parts).unwrap();
        let rebuilt = reassemble(&report);
        assert_eq!(rebuilt.schema().fields(), source.schema().fields());
        assert_eq!(rebuilt.columns(), source.columns());
    }

    #[test]
    fn test_chunk_column_types_match_source() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let input = temp_dir.path().join("typed.parquet");
        ParquetCodec::new()
            .write(&input, &sample_schema(), &[sample_batch(0, 64)])
            .unwrap();

        let report = FileSplitter::new().split_file(&input).unwrap();
        let (chunk_schema, _) = ParquetCodec::new().read(&report.chunks[0].path).unwrap();

        let types: Vec<&DataType> = chunk_schema.fields().iter().map(|f| f.data_type()).collect();
        assert_eq!(
            types,
            vec![&DataType::Int64, &DataType::Utf8, &DataType::Float64, &DataType::Boolean]
        );
        // No index column sneaks in
        assert_eq!(chunk_schema.fields().len(), 4);
    }

    #[test]
    fn test_arrow_ipc_split_keeps_format() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let input = temp_dir.path().join("events.arrow");
        let source = sample_batch(0, 300);
        ArrowIpcCodec.write(&input, &sample_schema(), &[source.clone()]).unwrap();

        let file_bytes = std::fs::metadata(&input).unwrap().len();
        let config = SplitConfig {
            max_size_gb: file_bytes as f64 / 2.0 / BYTES_PER_GB,
            ..Default::default()
        };
        let report = FileSplitter::with_config(config).split_file(&input).unwrap();

        assert_eq!(report.format, ColumnarFormat::ArrowIpc);
        assert!(report.num_chunks() >= 2);
        assert_eq!(report.chunks[0].path, temp_dir.path().join("events_part_001.arrow"));
        assert_eq!(reassemble(&report), source);
    }

    #[test]
    fn test_large_limit_yields_single_chunk() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let input = temp_dir.path().join("whole.parquet");
        let source = sample_batch(0, 2000);
        ParquetCodec::new()
            .write(&input, &sample_schema(), &[source.clone()])
            .unwrap();

        let report = FileSplitter::with_config(SplitConfig {
            max_size_gb: 1000.0,
            ..Default::default()
        })
        .split_file(&input)
        .unwrap();

        assert_eq!(report.rows_per_chunk, 2000);
        assert_eq!(report.num_chunks(), 1);
        assert_eq!(report.chunks[0].num_rows(), 2000);
        assert_eq!(reassemble(&report).columns(), source.columns());
    }

    #[test]
    fn test_report_paths_follow_naming_scheme() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let input = temp_dir.path().join("test.parquet");
        ParquetCodec::new()
            .write(&input, &sample_schema(), &[sample_batch(0, 120)])
            .unwrap();

        let file_bytes = std::fs::metadata(&input).unwrap().len();
        let report = FileSplitter::with_config(SplitConfig {
            max_size_gb: file_bytes as f64 / 12.0 / BYTES_PER_GB,
            ..Default::default()
        })
        .split_file(&input)
        .unwrap();

        let names: Vec<PathBuf> = report
            .chunks
            .iter()
            .map(|c| PathBuf::from(c.path.file_name().unwrap()))
            .collect();
        for (i, name) in names.iter().enumerate() {
            assert_eq!(name, Path::new(&format!("test_part_{:03}.parquet", i + 1)));
        }
        assert_eq!(report.total_output_bytes(), report.chunks.iter().map(|c| c.size_bytes).sum::<u64>());
    }
}
