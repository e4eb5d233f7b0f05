//! Output configuration types

/// Rendering used for the sorted listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One path per line
    #[default]
    Plain,
    /// A single JSON array of path strings
    Json,
}

/// Configuration for output formatting.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Prefix plain-text lines with size and modification time
    pub details: bool,
    /// Print at most this many entries
    pub limit: Option<usize>,
}

impl OutputConfig {
    pub fn json() -> Self {
        Self {
            format: OutputFormat::Json,
            ..Default::default()
        }
    }
}
