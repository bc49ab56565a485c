//! Error types for the listing engine.

use thiserror::Error;

/// Errors surfaced when a listing is misconfigured.
///
/// Both variants indicate a programming error in the calling UI, not a data
/// condition: empty collections and zero matches are normal, well-formed
/// results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListingError {
    /// Page size below 1 makes pagination meaningless.
    #[error("page size must be at least 1, got {0}")]
    InvalidPageSize(usize),

    /// The sort field is not part of the record's field list.
    ///
    /// Surfaced rather than ignored so a misconfigured column header shows up
    /// immediately instead of silently not sorting.
    #[error("unknown sort field '{0}'")]
    UnknownSortField(String),
}

/// Result type for listing operations.
pub type Result<T> = std::result::Result<T, ListingError>;
