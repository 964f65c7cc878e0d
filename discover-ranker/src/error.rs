//! Error types raised while ranking catalog rows.

use thiserror::Error;

/// Errors raised by the rankers' strict entry points.
///
/// The lenient entry points (`similar_to`, `recommend`) convert these into
/// their documented fallbacks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankingError {
    /// No catalog row's name contains the query.
    #[error("no place matches {query:?}")]
    NotFound {
        /// Name query as supplied by the caller.
        query: String,
    },
    /// A content source referred to a row outside the catalog.
    #[error("row {row} is outside the catalog")]
    UnknownRow {
        /// Offending row position.
        row: usize,
    },
}
