//! The main Book type and its physical/digital variants

use super::{BookStatus, Genre};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Physical or digital edition of a book.
///
/// The variant is persisted as the opening tag of each saved record, which
/// keeps serialization exhaustive: adding a variant forces the codec to
/// handle it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum BookKind {
    /// Printed book
    Physical,

    /// Digital book with the path, URL, or platform where it lives
    /// (e.g. "C:/Books/rust.pdf", "Kindle")
    Ebook { location: String },
}

impl BookKind {
    /// Whether two kinds are the same variant, ignoring the ebook location
    pub fn same_variant(&self, other: &BookKind) -> bool {
        matches!(
            (self, other),
            (BookKind::Physical, BookKind::Physical) | (BookKind::Ebook { .. }, BookKind::Ebook { .. })
        )
    }
}

/// A tracked book in the reading list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    /// Unique identifier, immutable after creation
    pub id: String,

    pub title: String,
    pub author: String,
    pub publisher: String,

    /// Synopsis; free text, may span multiple lines
    pub description: String,

    pub total_pages: u32,

    /// Page the reader stopped at, `0..=total_pages`
    pub current_page: u32,

    /// User rating, 0-5 stars
    pub rating: u8,

    pub status: BookStatus,

    /// Genre reference; absent when the book was never categorized or the
    /// referenced genre no longer exists in the store
    pub genre: Option<Genre>,

    /// Personal annotations, in insertion order
    pub notes: Vec<String>,

    /// Favorite quotes, in insertion order
    pub quotes: Vec<String>,

    pub kind: BookKind,
}

impl Book {
    /// Create a new book with a freshly generated id and registration
    /// defaults: status to-read, rating 0, current page 0, no notes or
    /// quotes.
    pub fn new(
        kind: BookKind,
        title: impl Into<String>,
        author: impl Into<String>,
        total_pages: u32,
        publisher: impl Into<String>,
        description: impl Into<String>,
        genre: Option<Genre>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            author: author.into(),
            publisher: publisher.into(),
            description: description.into(),
            total_pages,
            current_page: 0,
            rating: 0,
            status: BookStatus::default(),
            genre,
            notes: Vec::new(),
            quotes: Vec::new(),
            kind,
        }
    }

    /// Add a favorite quote
    pub fn add_quote(&mut self, quote: impl Into<String>) {
        self.quotes.push(quote.into());
    }

    /// Add a personal annotation
    pub fn add_note(&mut self, note: impl Into<String>) {
        self.notes.push(note.into());
    }

    /// Whether this book and `other` denote the same stored entity:
    /// matching id and matching variant. Field edits do not change
    /// identity.
    pub fn same_identity(&self, other: &Book) -> bool {
        self.id == other.id && self.kind.same_variant(&other.kind)
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} / {} / Total pages: {}",
            self.title, self.author, self.total_pages
        )
    }
}
