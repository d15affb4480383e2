//! Library
//!
//! Owns serialization of the book collection into one storage slot.
//!
//! ## Responsibilities
//! - Seed the slot on first load
//! - Add / update / delete by full read-modify-write
//! - List books sorted by title
//! - Hide records that do not deserialize into a [`Book`], but keep them
//!   in the slot across mutations

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::book::Book;
use crate::error::{BookError, Result};
use crate::seed;

use super::StorageSlot;

/// Slot name used when none is configured
pub const DEFAULT_STORAGE_KEY: &str = "books";

/// The storage layer over a single slot
///
/// Every mutation rewrites the entire collection. That is fine for a
/// personal reading list and nothing more.
pub struct Library<S: StorageSlot> {
    slot: S,
    key: String,
}

impl<S: StorageSlot> Library<S> {
    /// Open a library on the default key
    pub fn new(slot: S) -> Self {
        Self::with_key(slot, DEFAULT_STORAGE_KEY)
    }

    /// Open a library on a custom key
    pub fn with_key(slot: S, key: impl Into<String>) -> Self {
        Self {
            slot,
            key: key.into(),
        }
    }

    /// Write the seed set if the key has never been written
    ///
    /// Does nothing when the key exists, even if it holds an empty array.
    pub fn prepopulate_on_first_load(&self) {
        match self.slot.get(&self.key) {
            Ok(Some(_)) => {}
            Ok(None) => {
                let records: Vec<StoredRecord> =
                    seed::seed_books().into_iter().map(StoredRecord::Book).collect();
                match self.write_collection(&records) {
                    Ok(()) => info!(key = %self.key, count = records.len(), "seeded library"),
                    Err(e) => warn!(key = %self.key, error = %e, "failed to seed library"),
                }
            }
            Err(e) => warn!(key = %self.key, error = %e, "skipping seed, storage unavailable"),
        }
    }

    /// Append a book
    ///
    /// No duplicate-id check.
    pub fn add(&self, book: &Book) -> Result<()> {
        let mut records = self.read_collection()?;
        records.push(StoredRecord::Book(book.clone()));
        self.write_collection(&records)
    }

    /// Replace the first stored book with the same id
    ///
    /// Returns `NotFound` without writing when no book has that id.
    pub fn update(&self, book: &Book) -> Result<()> {
        let mut records = self.read_collection()?;
        let entry = records
            .iter_mut()
            .find(|record| record.book_id() == Some(book.id))
            .ok_or(BookError::NotFound(book.id))?;
        *entry = StoredRecord::Book(book.clone());
        self.write_collection(&records)
    }

    /// Remove every book with this id
    ///
    /// Succeeds even when nothing matched.
    pub fn delete(&self, id: i64) -> Result<()> {
        let mut records = self.read_collection()?;
        let before = records.len();
        records.retain(|record| record.book_id() != Some(id));
        if records.len() == before {
            debug!(id, "delete matched no book");
        }
        self.write_collection(&records)
    }

    /// All valid books sorted ascending by title (case-sensitive)
    ///
    /// Empty when the slot is unavailable, absent or unreadable.
    pub fn list(&self) -> Vec<Book> {
        match self.read_collection() {
            Ok(records) => {
                let mut books: Vec<Book> = records
                    .into_iter()
                    .filter_map(StoredRecord::into_book)
                    .collect();
                // Stable sort, equal titles keep stored order
                books.sort_by(|a, b| a.title.cmp(&b.title));
                books
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "listing books failed");
                Vec::new()
            }
        }
    }

    /// Look up one book by id
    pub fn get(&self, id: i64) -> Option<Book> {
        self.list().into_iter().find(|book| book.id == id)
    }

    /// Get the slot key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Get the underlying slot
    pub fn slot(&self) -> &S {
        &self.slot
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Read the stored collection in stored order
    fn read_collection(&self) -> Result<Vec<StoredRecord>> {
        match self.slot.get(&self.key)? {
            Some(raw) if !raw.trim().is_empty() => decode_collection(&raw),
            _ => Ok(Vec::new()),
        }
    }

    fn write_collection(&self, records: &[StoredRecord]) -> Result<()> {
        let raw = serde_json::to_string(records)?;
        self.slot.set(&self.key, &raw)?;
        debug!(key = %self.key, count = records.len(), bytes = raw.len(), "wrote collection");
        Ok(())
    }
}

/// One element of the stored array
///
/// Elements that fail validation are carried as raw JSON so a rewrite
/// puts them back exactly as they were read.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
enum StoredRecord {
    Book(Book),
    Unreadable(Value),
}

impl StoredRecord {
    fn book_id(&self) -> Option<i64> {
        match self {
            StoredRecord::Book(book) => Some(book.id),
            StoredRecord::Unreadable(_) => None,
        }
    }

    fn into_book(self) -> Option<Book> {
        match self {
            StoredRecord::Book(book) => Some(book),
            StoredRecord::Unreadable(_) => None,
        }
    }
}

/// Parse a stored blob, validating each element on its own
///
/// A blob that is not a JSON array at all is `Corrupted`.
fn decode_collection(raw: &str) -> Result<Vec<StoredRecord>> {
    let values: Vec<Value> =
        serde_json::from_str(raw).map_err(|e| BookError::Corrupted(e.to_string()))?;

    let records = values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            let parsed = Book::deserialize(&value);
            match parsed {
                Ok(book) => StoredRecord::Book(book),
                Err(e) => {
                    warn!(index, error = %e, "hiding invalid book record");
                    StoredRecord::Unreadable(value)
                }
            }
        })
        .collect();
    Ok(records)
}
