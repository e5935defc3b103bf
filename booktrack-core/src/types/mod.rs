//! Core domain types for the Booktrack reading list

mod book;
mod genre;
mod status;

pub use book::{Book, BookKind};
pub use genre::Genre;
pub use status::BookStatus;
