//! Decoders for the saved genre and book files

use super::tags;
use crate::error::ParseError;
use crate::types::{Book, BookKind, BookStatus, Genre};

/// Decode the genre file: one `GENRE: <id> ; <name>` record per line.
///
/// Lines that don't carry the tag or don't split into exactly two parts
/// are skipped, so a damaged line costs one genre, never the whole file.
pub fn decode_genres(content: &str) -> Vec<Genre> {
    let mut genres = Vec::new();
    for line in content.lines() {
        let Some(data) = line.strip_prefix(tags::GENRE) else {
            if !line.is_empty() {
                tracing::warn!(line, "skipping unrecognized genre line");
            }
            continue;
        };
        let parts: Vec<&str> = data.split(tags::SEPARATOR).collect();
        match parts.as_slice() {
            [id, name] => genres.push(Genre::from_stored(*id, *name)),
            _ => tracing::warn!(line, "skipping malformed genre line"),
        }
    }
    genres
}

/// Which multi-line block is currently being accumulated
#[derive(Clone, Copy)]
enum Block {
    Description,
    Quote,
    Note,
}

impl Block {
    fn end_tag(self) -> &'static str {
        match self {
            Block::Description => tags::DESCRIPTION_END,
            Block::Quote => tags::QUOTE_END,
            Block::Note => tags::NOTE_END,
        }
    }
}

/// Accumulates the fields of one book record as its lines arrive.
///
/// Fields may appear in any order inside a record, so everything stays
/// optional until `BOOK_END` finalizes the record via [`BookBuilder::finish`].
#[derive(Default)]
struct BookBuilder {
    is_ebook: bool,
    id: Option<String>,
    title: Option<String>,
    author: Option<String>,
    publisher: Option<String>,
    location: Option<String>,
    total_pages: u32,
    current_page: u32,
    rating: u8,
    status: BookStatus,
    genre: Option<Genre>,
    description: String,
    notes: Vec<String>,
    quotes: Vec<String>,
}

impl BookBuilder {
    fn open(kind: &str) -> Self {
        Self {
            is_ebook: kind == tags::KIND_EBOOK,
            ..Self::default()
        }
    }

    /// Build the concrete book, substituting defaults for anything the
    /// record never supplied.
    fn finish(self) -> Book {
        let kind = if self.is_ebook {
            BookKind::Ebook {
                location: self.location.unwrap_or_default(),
            }
        } else {
            BookKind::Physical
        };
        Book {
            id: self.id.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            author: self.author.unwrap_or_default(),
            publisher: self.publisher.unwrap_or_default(),
            description: self.description,
            total_pages: self.total_pages,
            current_page: self.current_page,
            rating: self.rating,
            status: self.status,
            genre: self.genre,
            notes: self.notes,
            quotes: self.quotes,
            kind,
        }
    }
}

/// Decode the book file against an already-loaded genre list.
///
/// The decoder is a small state machine: outside a block, tagged lines fill
/// the current [`BookBuilder`]; inside a `*_START`/`*_END` block, every line
/// is accumulated verbatim until the matching end tag. A malformed numeric
/// field aborts the whole load. A record left open at end of input is
/// dropped, matching how earlier versions treated truncated files.
pub fn decode_books(content: &str, genres: &[Genre]) -> Result<Vec<Book>, ParseError> {
    let mut books = Vec::new();
    let mut builder: Option<BookBuilder> = None;
    let mut block: Option<(Block, Vec<String>)> = None;

    for line in content.lines() {
        // Inside a text block every line is content until the end tag.
        if let Some((current, lines)) = block.as_mut() {
            if line == current.end_tag() {
                let text = lines.join("\n");
                if let Some(b) = builder.as_mut() {
                    match current {
                        Block::Description => b.description = text,
                        Block::Quote => b.quotes.push(text),
                        Block::Note => b.notes.push(text),
                    }
                }
                block = None;
            } else {
                lines.push(line.to_string());
            }
            continue;
        }

        if let Some(kind) = line.strip_prefix(tags::BOOK_START) {
            builder = Some(BookBuilder::open(kind));
        } else if let Some(value) = line.strip_prefix(tags::ID) {
            if let Some(b) = builder.as_mut() {
                b.id = Some(value.to_string());
            }
        } else if let Some(value) = line.strip_prefix(tags::TITLE) {
            if let Some(b) = builder.as_mut() {
                b.title = Some(value.to_string());
            }
        } else if let Some(value) = line.strip_prefix(tags::AUTHOR) {
            if let Some(b) = builder.as_mut() {
                b.author = Some(value.to_string());
            }
        } else if let Some(value) = line.strip_prefix(tags::PUBLISHER) {
            if let Some(b) = builder.as_mut() {
                b.publisher = Some(value.to_string());
            }
        } else if let Some(value) = line.strip_prefix(tags::TOTAL_PAGES) {
            if let Some(b) = builder.as_mut() {
                b.total_pages = parse_number("TOTAL_PAGES", value)?;
            }
        } else if let Some(value) = line.strip_prefix(tags::CURRENT_PAGE) {
            if let Some(b) = builder.as_mut() {
                b.current_page = parse_number("CURRENT_PAGE", value)?;
            }
        } else if let Some(value) = line.strip_prefix(tags::RATING) {
            if let Some(b) = builder.as_mut() {
                b.rating = parse_number("RATING", value)?;
            }
        } else if let Some(value) = line.strip_prefix(tags::STATUS) {
            if let Some(b) = builder.as_mut() {
                b.status = BookStatus::from_wire(value);
            }
        } else if let Some(value) = line.strip_prefix(tags::GENRE_ID) {
            if let Some(b) = builder.as_mut() {
                // No match (including the NULL_GENRE_ID sentinel) means
                // "no genre", never an error.
                b.genre = genres.iter().find(|g| g.id == value).cloned();
            }
        } else if let Some(value) = line.strip_prefix(tags::LOCAL) {
            if let Some(b) = builder.as_mut() {
                b.location = Some(value.to_string());
            }
        } else if line == tags::DESCRIPTION_START {
            if builder.is_some() {
                block = Some((Block::Description, Vec::new()));
            }
        } else if line == tags::QUOTE_START {
            if builder.is_some() {
                block = Some((Block::Quote, Vec::new()));
            }
        } else if line == tags::NOTE_START {
            if builder.is_some() {
                block = Some((Block::Note, Vec::new()));
            }
        } else if line == tags::BOOK_END {
            if let Some(b) = builder.take() {
                books.push(b.finish());
            }
        }
        // Anything else (blank separators, stray text) is ignored.
    }

    if builder.is_some() {
        tracing::warn!("book file ended inside a record; dropping the unterminated book");
    }

    Ok(books)
}

fn parse_number<T: std::str::FromStr>(tag: &'static str, value: &str) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidNumber {
        tag,
        value: value.to_string(),
    })
}
