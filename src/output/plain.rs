//! Plain-text output formatting

use std::io::Write;

use crate::entry::FileEntry;
use crate::error::Result;
use crate::utils::{format_size, format_timestamp};

/// Write one path per line.
///
/// With `details`, each line becomes `<size>  <mtime>  <path>`.
pub fn write_plain<W: Write>(out: &mut W, entries: &[FileEntry], details: bool) -> Result<()> {
    for entry in entries {
        if details {
            writeln!(
                out,
                "{:>8}  {}  {}",
                format_size(entry.size),
                format_timestamp(entry.modified),
                entry.path.display()
            )?;
        } else {
            writeln!(out, "{}", entry.path.display())?;
        }
    }
    Ok(())
}
