//! # booktrack
//!
//! A personal library tracker with:
//! - One storage slot holding the whole collection as a JSON array
//! - Record validation on every read
//! - A UI-free controller with an explicit create/edit form state
//! - A command-line front end over a file-backed slot
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Front end (CLI / tests)                     │
//! │              implements view::Presenter                      │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ submit / edit / move / delete / search
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     Controller                               │
//! │           FormState (Create | Edit) + Shelf                  │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ add / update / delete / list
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      Library                                 │
//! │          full read-modify-write of one JSON array            │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │ MemorySlot  │          │  FileSlot   │
//!   │  (RwLock)   │          │ {key}.json  │
//!   └─────────────┘          └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod book;
pub mod seed;
pub mod storage;
pub mod view;
pub mod controller;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{BookError, Result};
pub use config::Config;
pub use book::{Book, BookDraft};
pub use storage::{FileSlot, Library, MemorySlot, StorageSlot};
pub use controller::{Clock, Controller, Outcome, SystemClock};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of booktrack
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
