//! Encoders producing the saved genre and book files

use super::tags;
use crate::types::{Book, BookKind, Genre};

/// Encode the genre collection, one line per genre in collection order.
pub fn encode_genres(genres: &[Genre]) -> String {
    let mut out = String::new();
    for genre in genres {
        out.push_str(tags::GENRE);
        out.push_str(&genre.id);
        out.push_str(tags::SEPARATOR);
        out.push_str(&genre.name);
        out.push('\n');
    }
    out
}

/// Encode the book collection as tagged blocks separated by blank lines,
/// in collection order.
pub fn encode_books(books: &[Book]) -> String {
    let mut out = String::new();
    for book in books {
        encode_book(book, &mut out);
    }
    out
}

fn encode_book(book: &Book, out: &mut String) {
    let kind_name = match &book.kind {
        BookKind::Physical => tags::KIND_PHYSICAL,
        BookKind::Ebook { .. } => tags::KIND_EBOOK,
    };
    push_field(out, tags::BOOK_START, kind_name);

    push_field(out, tags::ID, &book.id);
    push_field(out, tags::TITLE, &book.title);
    push_field(out, tags::AUTHOR, &book.author);
    push_field(out, tags::PUBLISHER, &book.publisher);
    push_field(out, tags::TOTAL_PAGES, &book.total_pages.to_string());
    push_field(out, tags::CURRENT_PAGE, &book.current_page.to_string());
    push_field(out, tags::RATING, &book.rating.to_string());
    push_field(out, tags::STATUS, book.status.wire_name());

    // Only the genre id is stored; the name lives in the genre file.
    let genre_id = book
        .genre
        .as_ref()
        .map(|g| g.id.as_str())
        .unwrap_or(tags::NULL_GENRE_ID);
    push_field(out, tags::GENRE_ID, genre_id);

    if let BookKind::Ebook { location } = &book.kind {
        push_field(out, tags::LOCAL, location);
    }

    // Exactly one description block, even when the text is empty.
    push_block(out, tags::DESCRIPTION_START, tags::DESCRIPTION_END, &book.description);

    for quote in &book.quotes {
        push_block(out, tags::QUOTE_START, tags::QUOTE_END, quote);
    }
    for note in &book.notes {
        push_block(out, tags::NOTE_START, tags::NOTE_END, note);
    }

    out.push_str(tags::BOOK_END);
    out.push('\n');
    // Blank line separating records
    out.push('\n');
}

fn push_field(out: &mut String, tag: &str, value: &str) {
    out.push_str(tag);
    out.push_str(value);
    out.push('\n');
}

fn push_block(out: &mut String, start: &str, end: &str, text: &str) {
    out.push_str(start);
    out.push('\n');
    out.push_str(text);
    out.push('\n');
    out.push_str(end);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode_books, decode_genres};
    use crate::types::BookStatus;

    #[test]
    fn test_encode_genres_format() {
        let genres = vec![
            Genre::from_stored("id-1", "Fiction"),
            Genre::from_stored("id-2", "Horror"),
        ];
        assert_eq!(
            encode_genres(&genres),
            "GENRE: id-1 ; Fiction\nGENRE: id-2 ; Horror\n"
        );
    }

    #[test]
    fn test_encode_physical_book_layout() {
        let mut book = Book::new(
            BookKind::Physical,
            "Dune",
            "Frank Herbert",
            412,
            "Ace",
            "A desert planet.",
            Some(Genre::from_stored("g-1", "Sci-Fi")),
        );
        book.id = "book-1".to_string();
        book.add_quote("Fear is the mind-killer");

        let encoded = encode_books(&[book]);
        assert_eq!(
            encoded,
            "\
BOOK_START: PHYSICAL
ID: book-1
TITLE: Dune
AUTHOR: Frank Herbert
PUBLISHER: Ace
TOTAL_PAGES: 412
CURRENT_PAGE: 0
RATING: 0
STATUS: TO_READ
GENRE_ID: g-1
DESCRIPTION_START
A desert planet.
DESCRIPTION_END
QUOTE_START
Fear is the mind-killer
QUOTE_END
BOOK_END

"
        );
    }

    #[test]
    fn test_ebook_gets_local_line_and_physical_does_not() {
        let ebook = Book::new(
            BookKind::Ebook {
                location: "Kindle".to_string(),
            },
            "Snow Crash",
            "Neal Stephenson",
            440,
            "Bantam",
            "",
            None,
        );
        let encoded = encode_books(&[ebook]);
        assert!(encoded.contains("BOOK_START: EBOOK\n"));
        assert!(encoded.contains("LOCAL: Kindle\n"));
        assert!(encoded.contains("GENRE_ID: NULL_GENRE_ID\n"));

        let physical = Book::new(BookKind::Physical, "Dune", "Herbert", 412, "Ace", "", None);
        let encoded = encode_books(&[physical]);
        assert!(!encoded.contains("LOCAL: "));
    }

    #[test]
    fn test_round_trip_both_variants() {
        let genre = Genre::from_stored("g-1", "Sci-Fi");
        let mut physical = Book::new(
            BookKind::Physical,
            "Dune",
            "Frank Herbert",
            412,
            "Ace",
            "Multi-line\ndescription\n\nwith a blank line",
            Some(genre.clone()),
        );
        physical.status = BookStatus::Read;
        physical.rating = 5;
        physical.current_page = 412;
        physical.add_quote("Fear is the mind-killer");
        physical.add_quote("Second quote\nwith a line break");
        physical.add_note("a note");

        let ebook = Book::new(
            BookKind::Ebook {
                location: "C:/Books/snow-crash.epub".to_string(),
            },
            "Snow Crash",
            "Neal Stephenson",
            440,
            "Bantam",
            "",
            None,
        );

        let originals = vec![physical, ebook];
        let decoded = decode_books(&encode_books(&originals), &[genre]).unwrap();
        assert_eq!(decoded, originals);
    }

    #[test]
    fn test_genre_round_trip() {
        let originals = vec![Genre::new("Fiction"), Genre::new("Poetry")];
        let decoded = decode_genres(&encode_genres(&originals));
        assert_eq!(decoded, originals);
    }
}
