//! Tag strings of the saved-file format
//!
//! These are wire contracts: changing any of them breaks every file saved
//! by earlier versions.

/// Field separator inside a genre line
pub const SEPARATOR: &str = " ; ";

/// Genre id written for books without a genre
pub const NULL_GENRE_ID: &str = "NULL_GENRE_ID";

// Genre file
pub const GENRE: &str = "GENRE: ";

// Book record delimiters
pub const BOOK_START: &str = "BOOK_START: ";
pub const BOOK_END: &str = "BOOK_END";

/// Variant names carried by the `BOOK_START:` tag
pub const KIND_PHYSICAL: &str = "PHYSICAL";
pub const KIND_EBOOK: &str = "EBOOK";

// Single-line fields
pub const ID: &str = "ID: ";
pub const TITLE: &str = "TITLE: ";
pub const AUTHOR: &str = "AUTHOR: ";
pub const PUBLISHER: &str = "PUBLISHER: ";
pub const TOTAL_PAGES: &str = "TOTAL_PAGES: ";
pub const CURRENT_PAGE: &str = "CURRENT_PAGE: ";
pub const RATING: &str = "RATING: ";
pub const STATUS: &str = "STATUS: ";
pub const GENRE_ID: &str = "GENRE_ID: ";
/// Ebook-only: where the digital copy lives
pub const LOCAL: &str = "LOCAL: ";

// Multi-line text blocks
pub const DESCRIPTION_START: &str = "DESCRIPTION_START";
pub const DESCRIPTION_END: &str = "DESCRIPTION_END";
pub const QUOTE_START: &str = "QUOTE_START";
pub const QUOTE_END: &str = "QUOTE_END";
pub const NOTE_START: &str = "NOTE_START";
pub const NOTE_END: &str = "NOTE_END";
