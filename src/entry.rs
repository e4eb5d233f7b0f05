//! Collected file metadata

use std::path::PathBuf;
use std::time::SystemTime;

/// One non-directory entry found during the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path relative to the walk root, e.g. `src/main.go`
    pub path: PathBuf,
    pub modified: SystemTime,
    /// Size in bytes
    pub size: u64,
}

impl FileEntry {
    pub fn new(path: impl Into<PathBuf>, modified: SystemTime, size: u64) -> Self {
        Self {
            path: path.into(),
            modified,
            size,
        }
    }

    /// Path as a display string; non-UTF-8 bytes are replaced.
    pub fn display_path(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}
