//! Errors raised while loading a catalog source.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while reading the destination file.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// Opening the source file failed.
    #[error("failed to open catalog source at {path}")]
    Open {
        /// Requested source path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The header row could not be read.
    #[error("failed to read the catalog header row")]
    Header {
        /// Source error from `csv`.
        #[source]
        source: csv::Error,
    },
    /// A required column is absent from the header row.
    #[error("catalog source lacks required column {column:?}")]
    MissingColumn {
        /// Name of the missing column.
        column: &'static str,
    },
    /// A data row could not be read.
    #[error("failed to read catalog record on line {line}")]
    Record {
        /// One-based line number, when known.
        line: u64,
        /// Source error from `csv`.
        #[source]
        source: csv::Error,
    },
}
