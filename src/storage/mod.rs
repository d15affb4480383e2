//! Storage Module
//!
//! Persistent storage layer: one named slot holding the whole collection.
//!
//! ## Responsibilities
//! - Abstract the key-value medium behind [`StorageSlot`]
//! - Serialize the collection as a single JSON array
//! - Full read-modify-write on every mutation
//! - Validate records on read
//!
//! ## Slot Layout
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │ key: "books"                                                 │
//! ├──────────────────────────────────────────────────────────────┤
//! │ [                                                            │
//! │   {"id":1657184400000,"title":"Laskar Pelangi",              │
//! │    "author":"Andrea Hirata","year":2005,"isComplete":true},  │
//! │   ... (one object per book, no version field)                │
//! │ ]                                                            │
//! └──────────────────────────────────────────────────────────────┘
//! ```

mod slot;
mod library;

pub use slot::{FileSlot, MemorySlot};
pub use library::{Library, DEFAULT_STORAGE_KEY};

use crate::error::Result;

/// A key-value medium that stores whole string blobs
///
/// Both methods return `BookError::StorageUnavailable` when the medium
/// cannot be reached.
pub trait StorageSlot: Send + Sync {
    /// Read the blob under `key`, `Ok(None)` if the key was never written
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the blob under `key`
    fn set(&self, key: &str, value: &str) -> Result<()>;
}
