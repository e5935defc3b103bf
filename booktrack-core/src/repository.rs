//! The in-memory library and its persistence-backed mutation API
//!
//! [`Library`] owns the authoritative book and genre collections. Every
//! mutation validates first, then appends/replaces in memory, then rewrites
//! both files. Callers get defensive copies from the read accessors, so the
//! only way to change the store is through this API.

use crate::error::{Result, ValidationError};
use crate::storage::TextStore;
use crate::types::{Book, Genre};

/// Highest allowed star rating
const MAX_RATING: u8 = 5;

pub struct Library {
    store: TextStore,
    books: Vec<Book>,
    genres: Vec<Genre>,
}

impl Library {
    /// Open the library, loading genres first and then books so each
    /// book's genre reference can be resolved against the loaded list.
    ///
    /// A file that fails to load is replaced by an empty collection so the
    /// application can still start; the failure is logged.
    pub fn open(store: TextStore) -> Self {
        let genres = match store.load_genres() {
            Ok(genres) => genres,
            Err(e) => {
                tracing::warn!(error = %e, "failed to load genres; starting with an empty list");
                Vec::new()
            }
        };
        let books = match store.load_books(&genres) {
            Ok(books) => books,
            Err(e) => {
                tracing::warn!(error = %e, "failed to load books; starting with an empty list");
                Vec::new()
            }
        };
        Self {
            store,
            books,
            genres,
        }
    }

    /// Register a new book. Fails validation on a blank title, zero total
    /// pages, a current page past the end, or a rating above five stars.
    pub fn add_book(&mut self, book: Book) -> Result<()> {
        validate_book(&book)?;
        self.books.push(book);
        self.persist()
    }

    /// Register a new genre. Fails validation on a blank name or a
    /// case-insensitive duplicate of an existing name.
    pub fn add_genre(&mut self, genre: Genre) -> Result<()> {
        if genre.name.trim().is_empty() {
            return Err(ValidationError::EmptyGenreName.into());
        }
        if self
            .genres
            .iter()
            .any(|g| g.name.eq_ignore_ascii_case(&genre.name))
        {
            return Err(ValidationError::DuplicateGenre(genre.name).into());
        }
        self.genres.push(genre);
        self.persist()
    }

    /// Replace the stored book with the same id. Returns `true` when a
    /// book was replaced; an unknown id is a logged no-op returning
    /// `false`, not an error.
    pub fn update_book(&mut self, book: Book) -> Result<bool> {
        validate_book(&book)?;
        match self.books.iter().position(|b| b.id == book.id) {
            Some(index) => {
                tracing::debug!(id = %book.id, title = %book.title, "book updated");
                self.books[index] = book;
                self.persist()?;
                Ok(true)
            }
            None => {
                tracing::warn!(id = %book.id, "update requested for a book not in the library");
                Ok(false)
            }
        }
    }

    /// Remove the stored book with the same id. Returns `true` when a
    /// book was removed; an unknown id is a logged no-op returning
    /// `false`.
    pub fn delete_book(&mut self, book: &Book) -> Result<bool> {
        let before = self.books.len();
        self.books.retain(|b| b.id != book.id);
        if self.books.len() == before {
            tracing::warn!(id = %book.id, "delete requested for a book not in the library");
            return Ok(false);
        }
        tracing::debug!(id = %book.id, title = %book.title, "book removed");
        self.persist()?;
        Ok(true)
    }

    /// All books, as a defensive copy in insertion order.
    pub fn books(&self) -> Vec<Book> {
        self.books.clone()
    }

    /// All genres, as a defensive copy in insertion order.
    pub fn genres(&self) -> Vec<Genre> {
        self.genres.clone()
    }

    /// Books belonging to the given genre (matched by id), or every book
    /// when no filter genre is given.
    pub fn books_by_genre(&self, genre: Option<&Genre>) -> Vec<Book> {
        match genre {
            None => self.books.clone(),
            Some(filter) => self
                .books
                .iter()
                .filter(|b| b.genre.as_ref().is_some_and(|g| g.same_identity(filter)))
                .cloned()
                .collect(),
        }
    }

    /// Rewrite both files from the in-memory collections.
    fn persist(&self) -> Result<()> {
        self.store.save_genres(&self.genres)?;
        self.store.save_books(&self.books)?;
        Ok(())
    }
}

fn validate_book(book: &Book) -> std::result::Result<(), ValidationError> {
    if book.title.trim().is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    if book.total_pages == 0 {
        return Err(ValidationError::ZeroTotalPages);
    }
    if book.current_page > book.total_pages {
        return Err(ValidationError::PageOutOfRange {
            current: book.current_page,
            total: book.total_pages,
        });
    }
    if book.rating > MAX_RATING {
        return Err(ValidationError::RatingOutOfRange(book.rating));
    }
    Ok(())
}
