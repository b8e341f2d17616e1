//! Unified error types for codec operations.

use thiserror::Error;

/// Main error type for decode and encode operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A quoted segment was still open when its line ended.
    ///
    /// Carries the offending line and the number of characters scanned
    /// before the imbalance was detected.
    #[error("unbalanced quote at position {position}: {line}")]
    UnbalancedQuote { line: String, position: usize },

    /// A data row's field count differs from the column count established
    /// by the first line. Reports the 0-based data-row index.
    #[error("row {row} has {found} fields, expected {expected}")]
    RowLengthMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The underlying byte source could not be read or written.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The caller-supplied value codec rejected a cell. The original error
    /// is carried unchanged as the source.
    #[error("value codec error: {0}")]
    Cell(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Wrap an error raised by a [`ValueCodec`](crate::ValueCodec)
    /// implementation.
    pub fn cell<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Error::Cell(err.into())
    }
}

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, Error>;
