//! Reading status enumeration

use serde::{Deserialize, Serialize};

/// Reading state of a book.
///
/// The wire names (`TO_READ`, `READING`, `READ`) are part of the saved-file
/// contract; `Display` renders the label shown to the user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum BookStatus {
    #[default]
    ToRead,
    Reading,
    Read,
}

impl BookStatus {
    /// Name used in the saved book file
    pub fn wire_name(&self) -> &'static str {
        match self {
            BookStatus::ToRead => "TO_READ",
            BookStatus::Reading => "READING",
            BookStatus::Read => "READ",
        }
    }

    /// Parse a wire name; unknown or corrupt values fall back to the
    /// default so an old or damaged file still loads.
    pub fn from_wire(value: &str) -> Self {
        match value {
            "READING" => BookStatus::Reading,
            "READ" => BookStatus::Read,
            _ => BookStatus::ToRead,
        }
    }
}

impl std::fmt::Display for BookStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            BookStatus::ToRead => "To read",
            BookStatus::Reading => "Reading",
            BookStatus::Read => "Read",
        };
        write!(f, "{}", label)
    }
}
