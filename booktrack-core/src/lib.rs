//! Booktrack Core Library
//!
//! This crate is the persistence core of the Booktrack reading-list
//! manager: the domain model ([`types`]), the tagged text format the data
//! is saved in ([`codec`]), file-level load/save ([`storage`]), and the
//! [`Library`] facade the UI layer talks to.

pub mod codec;
pub mod error;
pub mod repository;
pub mod storage;
pub mod types;

pub use error::{BookTrackError, ParseError, Result, ValidationError};
pub use repository::Library;
pub use storage::TextStore;
pub use types::{Book, BookKind, BookStatus, Genre};
