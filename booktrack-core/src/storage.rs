//! File-level persistence for the two text stores
//!
//! Both files are rewritten wholesale on every save. Writes go to a
//! temporary file in the destination directory and are renamed into place,
//! so a crash mid-write never leaves a truncated store behind.

use crate::codec;
use crate::error::Result;
use crate::types::{Book, Genre};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Handle to the on-disk book and genre files.
pub struct TextStore {
    books_path: PathBuf,
    genres_path: PathBuf,
}

impl TextStore {
    /// Create a store backed by the given file paths. Neither file has to
    /// exist yet; a missing file reads as an empty collection.
    pub fn new(books_path: impl Into<PathBuf>, genres_path: impl Into<PathBuf>) -> Self {
        Self {
            books_path: books_path.into(),
            genres_path: genres_path.into(),
        }
    }

    pub fn books_path(&self) -> &Path {
        &self.books_path
    }

    pub fn genres_path(&self) -> &Path {
        &self.genres_path
    }

    /// Load all genres. A missing file is an empty collection.
    pub fn load_genres(&self) -> Result<Vec<Genre>> {
        let Some(content) = read_if_exists(&self.genres_path)? else {
            return Ok(Vec::new());
        };
        let genres = codec::decode_genres(&content);
        tracing::debug!(count = genres.len(), path = %self.genres_path.display(), "loaded genres");
        Ok(genres)
    }

    /// Load all books, resolving genre references against `genres`.
    /// A missing file is an empty collection; a malformed numeric field
    /// fails the whole load.
    pub fn load_books(&self, genres: &[Genre]) -> Result<Vec<Book>> {
        let Some(content) = read_if_exists(&self.books_path)? else {
            return Ok(Vec::new());
        };
        let books = codec::decode_books(&content, genres)?;
        tracing::debug!(count = books.len(), path = %self.books_path.display(), "loaded books");
        Ok(books)
    }

    /// Rewrite the genre file with the full collection.
    pub fn save_genres(&self, genres: &[Genre]) -> Result<()> {
        write_atomic(&self.genres_path, codec::encode_genres(genres).as_bytes())?;
        tracing::debug!(count = genres.len(), path = %self.genres_path.display(), "saved genres");
        Ok(())
    }

    /// Rewrite the book file with the full collection.
    pub fn save_books(&self, books: &[Book]) -> Result<()> {
        write_atomic(&self.books_path, codec::encode_books(books).as_bytes())?;
        tracing::debug!(count = books.len(), path = %self.books_path.display(), "saved books");
        Ok(())
    }
}

fn read_if_exists(path: &Path) -> io::Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// Write the full contents to a sibling temp file, flush, then rename over
/// the destination. The temp file handle is scoped so it is closed on every
/// exit path, including early returns on error.
fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    let mut tmp = match dir {
        Some(dir) => tempfile::NamedTempFile::new_in(dir)?,
        None => tempfile::NamedTempFile::new_in(".")?,
    };
    tmp.write_all(contents)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
