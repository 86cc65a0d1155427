//! Fixture batches shared by the splitter tests

use arrow::array::{ArrayRef, BooleanArray, Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use std::collections::HashMap;
use std::sync::Arc;

/// Rows `first_id..first_id + num_rows` of a small mixed-type table.
///
/// `name` grows with the id so row sizes vary, and every seventh `score` is
/// null.
pub fn sample_batch(first_id: i64, num_rows: usize) -> RecordBatch {
    let ids: Vec<i64> = (first_id..first_id + num_rows as i64).collect();

    let id: ArrayRef = Arc::new(Int64Array::from(ids.clone()));
    let name: ArrayRef = Arc::new(StringArray::from(
        ids.iter()
            .map(|i| format!("row-{}-{}", i, "x".repeat((*i % 13) as usize)))
            .collect::<Vec<_>>(),
    ));
    let score: ArrayRef = Arc::new(Float64Array::from(
        ids.iter()
            .map(|i| if i % 7 == 0 { None } else { Some(*i as f64 * 0.5) })
            .collect::<Vec<_>>(),
    ));
    let active: ArrayRef = Arc::new(BooleanArray::from(
        ids.iter().map(|i| i % 2 == 0).collect::<Vec<_>>(),
    ));

    RecordBatch::try_new(sample_schema(), vec![id, name, score, active])
        .expect("fixture columns match fixture schema")
}

pub fn sample_schema() -> Arc<Schema> {
    let metadata = HashMap::from([("origin".to_string(), "unit-test".to_string())]);
    Arc::new(Schema::new_with_metadata(
        vec![
            Field::new("id", DataType::Int64, false),
            Field::new("name", DataType::Utf8, false),
            Field::new("score", DataType::Float64, true),
            Field::new("active", DataType::Boolean, false),
        ],
        metadata,
    ))
}
