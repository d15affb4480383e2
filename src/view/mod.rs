//! View Module
//!
//! UI-free view model: the input form and the rendered shelf.
//!
//! ## Responsibilities
//! - Explicit create/edit form state
//! - Finished/unfinished partitions of rendered cards
//! - Live search as a filter over the current render
//! - Side effects a front end must perform ([`Presenter`])

mod form;
mod shelf;

pub use form::{FormMode, FormState};
pub use shelf::{BookCard, Shelf};

use std::fmt;

/// Blocking message shown after a successful mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    BookAdded,
    BookUpdated,
    BookMoved { title: String },
    BookDeleted,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::BookAdded => write!(f, "Added a new book"),
            Notice::BookUpdated => write!(f, "Book updated"),
            Notice::BookMoved { title } => write!(f, "Moved book {}", title),
            Notice::BookDeleted => write!(f, "Book deleted"),
        }
    }
}

/// Front-end side effects the controller asks for
pub trait Presenter {
    /// Show a blocking notice
    fn notify(&mut self, notice: &Notice);

    /// Ask the user to type a reply, `None` if they dismissed the prompt
    fn prompt(&mut self, message: &str) -> Option<String>;

    /// Bring the form into view
    fn scroll_to_top(&mut self);
}
