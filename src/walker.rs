//! Recursive directory walk collecting matching file entries

use std::path::Path;
use std::time::SystemTime;

use ignore::{DirEntry, WalkBuilder};
use log::{debug, warn};

use crate::entry::FileEntry;
use crate::error::{Error, Result};
use crate::filter::{ExtensionFilter, passes_time_filter};

/// Configuration for which entries the walk collects.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    pub extensions: ExtensionFilter,
    /// Only include files modified after this time
    pub newer_than: Option<SystemTime>,
    /// Only include files modified before this time
    pub older_than: Option<SystemTime>,
}

/// Depth-first walker over a directory tree.
///
/// Directories are visited but never collected. Symlinks are not followed and
/// are reported with their own metadata. Nothing is hidden: `.gitignore`,
/// hidden files and other ignore rules are all disabled.
pub struct Walker {
    config: WalkerConfig,
}

impl Walker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WalkerConfig {
        &self.config
    }

    /// Walk `root` and return every matching non-directory entry in walk order.
    ///
    /// Entries that cannot be read are logged and skipped. Fails only when
    /// `root` itself cannot be listed.
    pub fn collect(&self, root: &Path) -> Result<Vec<FileEntry>> {
        std::fs::read_dir(root).map_err(|source| Error::RootUnreadable {
            path: root.to_path_buf(),
            source,
        })?;

        let walker = WalkBuilder::new(root)
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        let mut entries = Vec::new();
        let mut skipped = 0usize;

        for result in walker {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("error accessing entry: {}", err);
                    skipped += 1;
                    continue;
                }
            };

            if entry.file_type().is_none_or(|ft| ft.is_dir()) {
                continue;
            }

            if !self
                .config
                .extensions
                .matches(&entry.file_name().to_string_lossy())
            {
                continue;
            }

            match self.read_entry(root, &entry) {
                Ok(Some(file)) => entries.push(file),
                Ok(None) => {}
                Err(err) => {
                    warn!("error accessing {}: {}", entry.path().display(), err);
                    skipped += 1;
                }
            }
        }

        debug!(
            "collected {} entries under {} ({} skipped)",
            entries.len(),
            root.display(),
            skipped
        );
        Ok(entries)
    }

    /// Read metadata for a matched entry; `None` if it falls outside the time window.
    fn read_entry(
        &self,
        root: &Path,
        entry: &DirEntry,
    ) -> std::result::Result<Option<FileEntry>, Box<dyn std::error::Error>> {
        let metadata = entry.metadata()?;
        let modified = metadata.modified()?;

        if !passes_time_filter(modified, self.config.newer_than, self.config.older_than) {
            return Ok(None);
        }

        let path = entry.path().strip_prefix(root).unwrap_or(entry.path());
        Ok(Some(FileEntry::new(path, modified, metadata.len())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn setup() -> TempDir {
        let dir = TempDir::new().expect("Failed to create temp dir");
        fs::write(dir.path().join("a.go"), "package a").unwrap();
        fs::write(dir.path().join("B.GO"), "package b").unwrap();
        fs::write(dir.path().join("notes.txt"), "notes").unwrap();
        fs::create_dir_all(dir.path().join("sub/deeper")).unwrap();
        fs::write(dir.path().join("sub/c.go"), "package c").unwrap();
        fs::write(dir.path().join("sub/deeper/d.md"), "# d").unwrap();
        fs::create_dir(dir.path().join("empty.go")).unwrap();
        dir
    }

    fn collect(dir: &TempDir, exts: &[&str]) -> Vec<PathBuf> {
        let walker = Walker::new(WalkerConfig {
            extensions: ExtensionFilter::new(exts),
            ..Default::default()
        });
        walker
            .collect(dir.path())
            .expect("walk should succeed")
            .into_iter()
            .map(|e| e.path)
            .collect()
    }

    #[test]
    fn test_collects_all_files_without_filter() {
        let dir = setup();
        let paths = collect(&dir, &[]);
        assert_eq!(paths.len(), 5, "got {:?}", paths);
        assert!(paths.contains(&PathBuf::from("sub/deeper/d.md")));
    }

    #[test]
    fn test_directories_are_never_collected() {
        let dir = setup();
        let paths = collect(&dir, &["go"]);
        assert!(!paths.contains(&PathBuf::from("empty.go")));
        assert!(!paths.contains(&PathBuf::from("sub")));
    }

    #[test]
    fn test_filters_case_insensitively_and_recurses() {
        let dir = setup();
        let paths = collect(&dir, &["go"]);
        assert_eq!(
            paths,
            vec![
                PathBuf::from("B.GO"),
                PathBuf::from("a.go"),
                PathBuf::from("sub/c.go"),
            ]
        );
    }

    #[test]
    fn test_paths_are_relative_to_root() {
        let dir = setup();
        for path in collect(&dir, &[]) {
            assert!(path.is_relative(), "{} should be relative", path.display());
        }
    }

    #[test]
    fn test_records_size() {
        let dir = setup();
        let walker = Walker::new(WalkerConfig {
            extensions: ExtensionFilter::new(["txt"]),
            ..Default::default()
        });
        let entries = walker.collect(dir.path()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].size, 5);
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("does-not-exist");
        let err = Walker::new(WalkerConfig::default())
            .collect(&missing)
            .unwrap_err();
        assert!(matches!(err, Error::RootUnreadable { .. }));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_time_window_excludes_old_files() {
        let dir = setup();
        let walker = Walker::new(WalkerConfig {
            newer_than: Some(SystemTime::now() + std::time::Duration::from_secs(3600)),
            ..Default::default()
        });
        assert!(walker.collect(dir.path()).unwrap().is_empty());
    }
}
