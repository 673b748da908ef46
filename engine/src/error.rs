//! Error types for the Roster engine.

use thiserror::Error;

/// All possible errors from the Roster engine.
///
/// Every variant is a validation failure: the requested change is refused and
/// no state is touched. Edits and deletes of unknown ids are not errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("missing required field: {0}")]
    MissingRequiredField(&'static str),

    #[error("invalid page size: {0} (expected one of 10, 25, 50, 100)")]
    InvalidPageSize(usize),

    #[error("invalid page: {0} (pages start at 1)")]
    InvalidPage(usize),

    #[error("invalid sort key: {0}")]
    InvalidSortKey(String),

    #[error("no id left after {0}")]
    IdSpaceExhausted(i64),
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
