//! Form state
//!
//! The single input form, either creating a new book or editing one.

use crate::book::{Book, BookDraft};

/// Which book, if any, the form is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    /// Submit creates a new book
    #[default]
    Create,

    /// Submit replaces the stored book with this id
    Edit { book_id: i64 },
}

/// Input fields plus the current mode
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub title: String,
    pub author: String,
    /// Kept as typed; parsed on submit
    pub year: String,
    pub is_complete: bool,
    mode: FormMode,
}

impl FormState {
    const CREATE_HEADING: &'static str = "Add a book manually";
    const EDIT_HEADING: &'static str = "Edit book";

    /// Empty form in create mode
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Heading shown above the form
    pub fn heading(&self) -> &'static str {
        match self.mode {
            FormMode::Create => Self::CREATE_HEADING,
            FormMode::Edit { .. } => Self::EDIT_HEADING,
        }
    }

    /// The reset control is only offered while creating
    pub fn reset_visible(&self) -> bool {
        matches!(self.mode, FormMode::Create)
    }

    /// The cancel control is only offered while editing
    pub fn cancel_visible(&self) -> bool {
        matches!(self.mode, FormMode::Edit { .. })
    }

    /// Fill the inputs with `draft`
    pub fn fill(&mut self, draft: BookDraft) {
        self.title = draft.title;
        self.author = draft.author;
        self.year = draft.year;
        self.is_complete = draft.is_complete;
    }

    /// Reset the inputs, mode unchanged
    pub fn clear(&mut self) {
        self.fill(BookDraft::default());
    }

    /// Snapshot of the inputs
    pub fn draft(&self) -> BookDraft {
        BookDraft {
            title: self.title.clone(),
            author: self.author.clone(),
            year: self.year.clone(),
            is_complete: self.is_complete,
        }
    }

    /// Switch to edit mode for `book`, carrying all its fields
    pub fn enter_edit(&mut self, book: &Book) {
        self.fill(BookDraft::from(book));
        self.mode = FormMode::Edit { book_id: book.id };
    }

    /// Back to create mode with empty inputs
    pub fn enter_create(&mut self) {
        self.clear();
        self.mode = FormMode::Create;
    }
}
