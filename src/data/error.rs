use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while turning a raster listing into a grid.
#[derive(Debug, Error)]
pub enum GridError {
    /// The input path could not be opened for reading.
    #[error("cannot open input '{}'", path.display())]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line split into fewer than three fields. `line` is 1-based.
    #[error(
        "malformed record on line {line}: expected at least 3 comma-separated fields, found {fields}"
    )]
    MalformedRecord { line: u64, fields: usize },

    /// The underlying reader failed mid-stream, or a line was not UTF-8.
    #[error("reading input at line {line}")]
    Read {
        line: u64,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, GridError>;
