//! Literary genre used to categorize and filter books

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A literary genre (e.g. "Fiction", "Biography").
///
/// The id is immutable for the lifetime of the data store; books reference
/// genres by id so the name can be edited without breaking those links.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Genre {
    /// Unique identifier, opaque to callers
    pub id: String,

    /// Human-readable name, need not be unique in storage
    pub name: String,
}

impl Genre {
    /// Create a new genre with a freshly generated id
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
        }
    }

    /// Reconstruct a genre loaded from storage, preserving its stored id
    pub fn from_stored(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Whether this genre and `other` denote the same stored entity
    pub fn same_identity(&self, other: &Genre) -> bool {
        self.id == other.id
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
