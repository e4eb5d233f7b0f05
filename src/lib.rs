//! Newestfiles - list files by extension, newest (or oldest, largest, smallest) first

pub mod entry;
pub mod error;
pub mod filter;
pub mod output;
pub mod sort;
pub mod utils;
pub mod walker;

#[cfg(feature = "test-utils")]
pub mod test_utils;

use std::io::Write;
use std::path::Path;

use log::debug;

pub use entry::FileEntry;
pub use error::{Error, Result};
pub use filter::{ExtensionFilter, normalize_extension};
pub use output::{OutputConfig, OutputFormat, render};
pub use sort::{SortMode, sort_entries};
pub use walker::{Walker, WalkerConfig};

/// Walk `root`, sort what was collected and render it to `out`.
pub fn list_files<W: Write>(
    root: &Path,
    walker: &Walker,
    mode: SortMode,
    output: &OutputConfig,
    out: &mut W,
) -> Result<()> {
    let mut entries = walker.collect(root)?;
    debug!("sorting {} entries by {}", entries.len(), mode);
    sort_entries(&mut entries, mode);
    render(out, &entries, output, !walker.config().extensions.is_empty())?;
    out.flush()?;
    Ok(())
}
