//! Sort modes and ordering of collected entries

use std::cmp::Ordering;
use std::fmt;

use crate::entry::FileEntry;
use crate::error::{Error, Result};

/// Ordering applied to the collected entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortMode {
    /// Most recently modified first
    #[default]
    Newest,
    /// Least recently modified first (`-o`)
    Oldest,
    /// Largest size first (`-l`)
    Largest,
    /// Smallest size first (`-s`)
    Smallest,
}

impl SortMode {
    /// Resolve the `-o`, `-l`, `-s` flags. At most one may be set.
    pub fn from_flags(oldest: bool, largest: bool, smallest: bool) -> Result<Self> {
        match (oldest, largest, smallest) {
            (false, false, false) => Ok(SortMode::Newest),
            (true, false, false) => Ok(SortMode::Oldest),
            (false, true, false) => Ok(SortMode::Largest),
            (false, false, true) => Ok(SortMode::Smallest),
            _ => Err(Error::ConflictingSortFlags),
        }
    }

    pub fn compare(self, a: &FileEntry, b: &FileEntry) -> Ordering {
        match self {
            SortMode::Newest => b.modified.cmp(&a.modified),
            SortMode::Oldest => a.modified.cmp(&b.modified),
            SortMode::Largest => b.size.cmp(&a.size),
            SortMode::Smallest => a.size.cmp(&b.size),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortMode::Newest => "newest",
            SortMode::Oldest => "oldest",
            SortMode::Largest => "largest",
            SortMode::Smallest => "smallest",
        };
        f.write_str(name)
    }
}

/// Sort entries in place. Stable, so ties keep walk order.
pub fn sort_entries(entries: &mut [FileEntry], mode: SortMode) {
    entries.sort_by(|a, b| mode.compare(a, b));
}
