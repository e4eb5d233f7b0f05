//! File selection: extension suffixes and modification-time window

use std::time::SystemTime;

/// Case-insensitive set of file name suffixes.
///
/// Every suffix is stored lower-cased with a leading `.`, so `go`, `.go` and
/// `.GO` all normalize to `.go`. An empty filter matches every name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionFilter {
    suffixes: Vec<String>,
}

impl ExtensionFilter {
    /// Build a filter from raw command-line tokens.
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            suffixes: tokens
                .into_iter()
                .map(|t| normalize_extension(t.as_ref()))
                .collect(),
        }
    }

    /// True when no suffixes were given.
    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }

    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    /// Check whether a file name ends with one of the suffixes.
    pub fn matches(&self, file_name: &str) -> bool {
        if self.suffixes.is_empty() {
            return true;
        }
        let name = file_name.to_lowercase();
        self.suffixes.iter().any(|s| name.ends_with(s.as_str()))
    }
}

/// Prepend `.` when missing and lower-case the result.
pub fn normalize_extension(token: &str) -> String {
    if token.starts_with('.') {
        token.to_lowercase()
    } else {
        format!(".{}", token.to_lowercase())
    }
}

/// Check a modification time against optional `newer_than` / `older_than` bounds.
pub fn passes_time_filter(
    mtime: SystemTime,
    newer_than: Option<SystemTime>,
    older_than: Option<SystemTime>,
) -> bool {
    if let Some(newer) = newer_than {
        if mtime < newer {
            return false;
        }
    }

    if let Some(older) = older_than {
        if mtime > older {
            return false;
        }
    }

    true
}
