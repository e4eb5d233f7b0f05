//! Listing output
//!
//! - `config` - Output configuration types
//! - `plain` - One path per line
//! - `json` - JSON array of paths

mod config;
mod json;
mod plain;

use std::io::Write;

pub use config::{OutputConfig, OutputFormat};
pub use json::write_json;
pub use plain::write_plain;

use crate::entry::FileEntry;
use crate::error::Result;

/// Printed when nothing was collected and no suffixes were given.
pub const NO_FILES_FOUND: &str = "No files found.";
/// Printed when nothing matched the given suffixes.
pub const NO_FILES_MATCHED: &str = "No files found with the specified suffixes.";

/// Render sorted entries according to `config`.
///
/// An empty listing prints an informational message in every format;
/// `filtered` selects the wording.
pub fn render<W: Write>(
    out: &mut W,
    entries: &[FileEntry],
    config: &OutputConfig,
    filtered: bool,
) -> Result<()> {
    if entries.is_empty() {
        let message = if filtered {
            NO_FILES_MATCHED
        } else {
            NO_FILES_FOUND
        };
        writeln!(out, "{}", message)?;
        return Ok(());
    }

    let shown = match config.limit {
        Some(n) => &entries[..n.min(entries.len())],
        None => entries,
    };

    match config.format {
        OutputFormat::Plain => write_plain(out, shown, config.details),
        OutputFormat::Json => write_json(out, shown),
    }
}
