//! Line-oriented text codec for the saved book and genre files
//!
//! Genres use one `GENRE:` line per record. Books use a tagged block format
//! (`BOOK_START:` .. `BOOK_END`) so long, multi-line texts such as the
//! description and quotes survive round-trips. The tag strings in
//! [`tags`] are a fixed contract with existing saved files.

mod decode;
mod encode;
pub mod tags;

pub use decode::{decode_books, decode_genres};
pub use encode::{encode_books, encode_genres};
