//! Book record
//!
//! The domain record for one library entry, plus the raw form payload it is
//! built from.

use serde::{Deserialize, Serialize};

use crate::error::{BookError, Result};

/// One library entry
///
/// Serialized with the persisted field names (`isComplete` in camelCase).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Creation timestamp in milliseconds, used as the identity
    pub id: i64,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub is_complete: bool,
}

impl Book {
    pub fn new(
        id: i64,
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        is_complete: bool,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            year,
            is_complete,
        }
    }

    /// Same book with the completion flag inverted
    pub fn toggled(&self) -> Self {
        Self {
            is_complete: !self.is_complete,
            ..self.clone()
        }
    }

    /// Visible author/year line, e.g. `Andrea Hirata (2005)`
    pub fn information(&self) -> String {
        format!("{} ({})", self.author, self.year)
    }
}

/// Raw form input before it becomes a [`Book`]
///
/// `year` stays text until [`BookDraft::into_book`] so the form can hold
/// whatever the user typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub year: String,
    pub is_complete: bool,
}

impl BookDraft {
    /// Build a book with the given id
    ///
    /// Fails with `InvalidInput` when the year is not an integer.
    pub fn into_book(self, id: i64) -> Result<Book> {
        let year_text = self.year.trim();
        let year = year_text.parse::<i32>().map_err(|_| {
            BookError::InvalidInput(format!("year must be a whole number, got {:?}", self.year))
        })?;

        Ok(Book {
            id,
            title: self.title,
            author: self.author,
            year,
            is_complete: self.is_complete,
        })
    }
}

impl From<&Book> for BookDraft {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            year: book.year.to_string(),
            is_complete: book.is_complete,
        }
    }
}
