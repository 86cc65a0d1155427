use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use super::file_splitter::types::{ColumnarFormat, BYTES_PER_GB};
use tracing::{debug, info, warn};

/// Resolves an explicit list of input paths against the local filesystem
pub struct FileDiscovery;

impl FileDiscovery {
    /// Classify each requested path, keeping the caller's order.
    ///
    /// Only "not found" counts as missing; any other stat failure marks that
    /// one path as unreadable and the rest of the list is still inspected.
    pub fn discover<P: AsRef<Path>>(paths: &[P]) -> Vec<DiscoveredFile> {
        paths.iter().map(|path| Self::inspect(path.as_ref())).collect()
    }

    fn inspect(path: &Path) -> DiscoveredFile {
        match fs::metadata(path) {
            Ok(metadata) => {
                let info = FileInfo {
                    path: path.to_path_buf(),
                    size_bytes: metadata.len(),
                    format: ColumnarFormat::from_extension(path),
                };
                debug!("Found {} ({} bytes, {})", path.display(), info.size_bytes, info.format.display_name());
                DiscoveredFile::Present(info)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => DiscoveredFile::Missing(path.to_path_buf()),
            Err(e) => {
                warn!("Failed to inspect {}: {}", path.display(), e);
                DiscoveredFile::Unreadable {
                    path: path.to_path_buf(),
                    error: format!("Failed to inspect {}: {}", path.display(), e),
                }
            }
        }
    }

    /// Generate processing summary
    pub fn generate_processing_summary(files: &[DiscoveredFile]) -> ProcessingSummary {
        let mut summary = ProcessingSummary {
            total_files: files.len(),
            present_files: 0,
            missing_files: 0,
            unreadable_files: 0,
            total_size_bytes: 0,
            files_by_format: HashMap::new(),
        };

        for file in files {
            match file {
                DiscoveredFile::Present(info) => {
                    summary.present_files += 1;
                    summary.total_size_bytes += info.size_bytes;
                    *summary.files_by_format.entry(info.format).or_insert(0) += 1;
                }
                DiscoveredFile::Missing(_) => summary.missing_files += 1,
                DiscoveredFile::Unreadable { .. } => summary.unreadable_files += 1,
            }
        }

        info!(
            "Discovered {} of {} requested files",
            summary.present_files, summary.total_files
        );
        summary
    }
}

/// Outcome of looking up one requested path
#[derive(Debug, Clone)]
pub enum DiscoveredFile {
    Present(FileInfo),
    Missing(PathBuf),
    /// The path could not be stat'ed for a reason other than absence
    Unreadable { path: PathBuf, error: String },
}

impl DiscoveredFile {
    pub fn path(&self) -> &Path {
        match self {
            DiscoveredFile::Present(info) => &info.path,
            DiscoveredFile::Missing(path) => path,
            DiscoveredFile::Unreadable { path, .. } => path,
        }
    }
}

/// Information about a discovered file
#[derive(Debug, Clone, Serialize)]
pub struct FileInfo {
    pub path: PathBuf,
    pub size_bytes: u64,
    pub format: ColumnarFormat,
}

/// Summary of files to be processed
#[derive(Debug, Clone, Serialize)]
pub struct ProcessingSummary {
    pub total_files: usize,
    pub present_files: usize,
    pub missing_files: usize,
    pub unreadable_files: usize,
    pub total_size_bytes: u64,
    pub files_by_format: HashMap<ColumnarFormat, usize>,
}

impl ProcessingSummary {
    pub fn format_summary(&self) -> String {
        let mut summary = format!(
            "Processing Summary:\n- Requested files: {}\n- Found: {}\n- Missing: {}\n- Unreadable: {}\n- Total size: {:.2} GB\n",
            self.total_files,
            self.present_files,
            self.missing_files,
            self.unreadable_files,
            self.total_size_bytes as f64 / BYTES_PER_GB
        );

        summary.push_str("\nFiles by format:\n");
        let mut formats: Vec<_> = self.files_by_format.iter().collect();
        formats.sort_by_key(|(format, _)| format.display_name());
        for (format, count) in formats {
            summary.push_str(&format!("- {}: {} files\n", format.display_name(), count));
        }

        summary
    }
}
