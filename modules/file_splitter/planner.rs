//! Chunk sizing and naming.
//!
//! Everything here is pure: the row estimate, the row ranges it implies and
//! the output file names are computed without touching the filesystem, so the
//! estimate can later be swapped for exact byte accounting.

use super::types::{ColumnarFormat, BYTES_PER_GB};
use anyhow::{anyhow, Result};
use std::ops::Range;
use std::path::{Path, PathBuf};

/// Estimate how many rows fit in `max_bytes`, assuming every row of the
/// source occupies the same share of its on-disk size.
///
/// The result is always at least 1 and never more than `total_rows` (when
/// there are rows at all). A zero-byte source yields a single chunk.
pub fn estimate_rows_per_chunk(total_rows: usize, file_bytes: u64, max_bytes: f64) -> usize {
    if total_rows == 0 {
        return 1;
    }
    if file_bytes == 0 {
        return total_rows;
    }

    let file_size_gb = file_bytes as f64 / BYTES_PER_GB;
    let rows_per_gb = total_rows as f64 / file_size_gb;
    let max_size_gb = max_bytes / BYTES_PER_GB;
    let target = (rows_per_gb * max_size_gb).floor();

    if target.is_nan() || target < 1.0 {
        1
    } else if target >= total_rows as f64 {
        total_rows
    } else {
        target as usize
    }
}

/// Number of chunks needed to hold `total_rows` at `rows_per_chunk` each
pub fn chunk_count(total_rows: usize, rows_per_chunk: usize) -> usize {
    total_rows.div_ceil(rows_per_chunk.max(1))
}

/// Contiguous, non-overlapping row ranges covering `0..total_rows` in order
pub fn plan_chunks(total_rows: usize, rows_per_chunk: usize) -> Vec<Range<usize>> {
    let step = rows_per_chunk.max(1);
    (0..total_rows)
        .step_by(step)
        .map(|start| start..(start + step).min(total_rows))
        .collect()
}

/// Output path for the chunk with 1-based `index`:
/// `<dir>/<stem>_part_<NNN>.<ext>`, next to the input.
pub fn chunk_path(input: &Path, format: ColumnarFormat, index: usize) -> Result<PathBuf> {
    let stem = input
        .file_stem()
        .ok_or_else(|| anyhow!("Input path has no file name: {}", input.display()))?
        .to_string_lossy();

    let ext = input
        .extension()
        .map(|ext| ext.to_string_lossy())
        .unwrap_or_else(|| format.canonical_extension().into());

    Ok(input.with_file_name(format!("{}_part_{:03}.{}", stem, index, ext)))
}
