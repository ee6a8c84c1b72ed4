//! Errors returned when a grid is misconfigured or addressed by an unknown column.
//!
//! Filtering, sorting and pagination never fail: malformed filter input is
//! treated as "no filter" and out-of-range page requests are clamped. Only
//! construction and operations that name a column can return a [`GridError`].

use thiserror::Error;

/// Errors produced by grid construction and column-addressed operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Two column descriptors share the same key.
    #[error("duplicate column key `{0}`")]
    DuplicateColumn(String),

    /// The column model is empty.
    #[error("a grid needs at least one column")]
    NoColumns,

    /// An operation referenced a column key that is not in the column model.
    #[error("unknown column `{0}`")]
    UnknownColumn(String),

    /// The configured page size is not one of [`crate::paginator::PAGE_SIZES`].
    #[error("unsupported page size {0}")]
    UnsupportedPageSize(usize),
}

/// Result alias for grid operations.
pub type Result<T> = std::result::Result<T, GridError>;
