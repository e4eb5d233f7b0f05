//! Test utilities for building scratch directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

/// A temporary directory tree with controllable modification times.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add a file whose modification time is `age` before now.
    pub fn add_file_aged(&self, path: &str, content: &str, age: Duration) -> PathBuf {
        let full_path = self.add_file(path, content);
        set_age(&full_path, age);
        full_path
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Set a file's modification time to `age` before now.
pub fn set_age(path: &Path, age: Duration) {
    let file = File::options()
        .write(true)
        .open(path)
        .expect("Failed to open file");
    file.set_modified(SystemTime::now() - age)
        .expect("Failed to set modification time");
}
