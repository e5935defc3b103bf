//! Error types for Booktrack Core

use thiserror::Error;

/// Result type alias using BookTrackError
pub type Result<T> = std::result::Result<T, BookTrackError>;

/// Top-level error type for all Booktrack operations
#[derive(Debug, Error)]
pub enum BookTrackError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// User-input problems surfaced by the repository facade.
/// Always recoverable; no state is mutated when one is raised.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Book title must not be empty")]
    EmptyTitle,

    #[error("Genre name must not be empty")]
    EmptyGenreName,

    #[error("A genre named '{0}' already exists")]
    DuplicateGenre(String),

    #[error("Total pages must be at least 1")]
    ZeroTotalPages,

    #[error("Current page {current} exceeds total pages {total}")]
    PageOutOfRange { current: u32, total: u32 },

    #[error("Rating {0} is out of range (0-5)")]
    RatingOutOfRange(u8),
}

/// Errors that occur while decoding the book file.
/// A parse error is fatal to the load: everything decoded before the
/// failing line is discarded.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Malformed number '{value}' for {tag}")]
    InvalidNumber { tag: &'static str, value: String },
}
