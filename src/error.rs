//! Error type for the listing pipeline

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// More than one of `-o`, `-l`, `-s` was given.
    #[error("Only one sort option can be specified at a time")]
    ConflictingSortFlags,

    /// The walk root is missing or cannot be listed.
    #[error("cannot access '{}': {source}", path.display())]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error writing output: {0}")]
    Output(#[from] io::Error),

    #[error("error encoding JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Process exit status for this error: 2 for usage errors, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::ConflictingSortFlags => 2,
            _ => 1,
        }
    }

    /// True when stdout was closed by the reader (e.g. `| head`).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Error::Output(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
