//! JSON output formatting

use std::io::Write;

use crate::entry::FileEntry;
use crate::error::Result;

/// Write paths as one compact JSON array, e.g. `["a.go","b.go"]`, with no trailing newline.
pub fn write_json<W: Write>(out: &mut W, entries: &[FileEntry]) -> Result<()> {
    let paths: Vec<String> = entries.iter().map(FileEntry::display_path).collect();
    let json = serde_json::to_string(&paths)?;
    out.write_all(json.as_bytes())?;
    Ok(())
}
