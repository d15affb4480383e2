//! Controller Module
//!
//! Wires user intents to the storage layer and keeps the view in sync.
//!
//! ## Responsibilities
//! - Drive the create/edit form state machine
//! - Call [`Library`] for every mutation and check the result
//! - Re-render the shelf from storage after edits and moves
//! - Ask the [`Presenter`] for notices, confirmation and scrolling

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, warn};

use crate::book::Book;
use crate::config::Config;
use crate::error::{BookError, Result};
use crate::storage::{Library, StorageSlot};
use crate::view::{FormMode, FormState, Notice, Presenter, Shelf};

/// Source of new book ids
pub trait Clock {
    /// Current time in milliseconds since the Unix epoch
    fn now_millis(&self) -> i64;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or_default()
    }
}

/// How a handler ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Storage accepted the change and the view was updated
    Done,

    /// Nothing changed: storage refused, or the user did not confirm
    Aborted,
}

/// The view controller
///
/// ## Flow
/// - Create submit: add → append card → clear form → notice
/// - Edit submit: update → full refresh → create mode → notice
/// - Move: update(toggled) → full refresh → notice
/// - Delete: confirm → delete → remove card → notice
///
/// A failed storage call aborts before the view is touched and shows no
/// notice.
pub struct Controller<S: StorageSlot, P: Presenter> {
    config: Config,
    library: Library<S>,
    presenter: P,
    clock: Box<dyn Clock>,
    form: FormState,
    shelf: Shelf,
}

impl<S: StorageSlot, P: Presenter> Controller<S, P> {
    /// Create a controller using the wall clock for ids
    pub fn new(config: Config, library: Library<S>, presenter: P) -> Self {
        Self {
            config,
            library,
            presenter,
            clock: Box::new(SystemClock),
            form: FormState::new(),
            shelf: Shelf::new(),
        }
    }

    /// Replace the id clock
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Seed on first load (if enabled) and render
    pub fn start(&mut self) {
        if self.config.seed_on_first_load {
            self.library.prepopulate_on_first_load();
        }
        self.update_view();
    }

    /// Clear both lists and render everything storage returns
    pub fn update_view(&mut self) {
        self.shelf.render(self.library.list());
    }

    /// Submit the form in its current mode
    ///
    /// Fails with `InvalidInput` when the year is not a number.
    pub fn submit(&mut self) -> Result<Outcome> {
        match self.form.mode() {
            FormMode::Create => self.create_book(),
            FormMode::Edit { book_id } => self.edit_book(book_id),
        }
    }

    /// Load a rendered book into the form for editing
    pub fn begin_edit(&mut self, id: i64) -> Result<()> {
        let book = self.rendered_book(id)?;
        self.presenter.scroll_to_top();
        self.form.enter_edit(&book);
        Ok(())
    }

    /// Leave edit mode without saving
    pub fn cancel_edit(&mut self) {
        self.form.enter_create();
    }

    /// Reset the inputs
    ///
    /// Only offered in create mode; ignored while editing.
    pub fn clear_form(&mut self) {
        if self.form.reset_visible() {
            self.form.clear();
        }
    }

    /// Flip the completion flag of a rendered book
    pub fn move_book(&mut self, id: i64) -> Result<Outcome> {
        let moved = self.rendered_book(id)?.toggled();
        if !self.storage_ok("move", self.library.update(&moved)) {
            return Ok(Outcome::Aborted);
        }

        self.update_view();
        self.presenter.notify(&Notice::BookMoved { title: moved.title });
        Ok(Outcome::Done)
    }

    /// Delete a rendered book after typed confirmation
    pub fn delete_book(&mut self, id: i64) -> Result<Outcome> {
        self.rendered_book(id)?;

        let expected = self.config.delete_confirmation.as_str();
        let message = format!("Type \"{}\" to confirm", expected);
        let reply = self.presenter.prompt(&message);
        if reply.as_deref() != Some(expected) {
            debug!(id, "delete not confirmed");
            return Ok(Outcome::Aborted);
        }

        if !self.storage_ok("delete", self.library.delete(id)) {
            return Ok(Outcome::Aborted);
        }

        self.shelf.remove(id);
        self.presenter.notify(&Notice::BookDeleted);
        Ok(Outcome::Done)
    }

    /// Filter the rendered cards by `query`
    pub fn search(&mut self, query: &str) {
        self.shelf.filter(query);
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Mutable inputs, the way a user types into the form
    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub fn shelf(&self) -> &Shelf {
        &self.shelf
    }

    pub fn library(&self) -> &Library<S> {
        &self.library
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn create_book(&mut self) -> Result<Outcome> {
        let book = self.form.draft().into_book(self.clock.now_millis())?;
        if !self.storage_ok("add", self.library.add(&book)) {
            return Ok(Outcome::Aborted);
        }

        self.shelf.append(book);
        self.form.clear();
        self.presenter.notify(&Notice::BookAdded);
        Ok(Outcome::Done)
    }

    fn edit_book(&mut self, book_id: i64) -> Result<Outcome> {
        let book = self.form.draft().into_book(book_id)?;
        if !self.storage_ok("update", self.library.update(&book)) {
            return Ok(Outcome::Aborted);
        }

        self.update_view();
        self.form.enter_create();
        self.presenter.notify(&Notice::BookUpdated);
        Ok(Outcome::Done)
    }

    fn rendered_book(&self, id: i64) -> Result<Book> {
        self.shelf
            .find(id)
            .map(|card| card.book.clone())
            .ok_or(BookError::NotFound(id))
    }

    fn storage_ok(&self, action: &str, result: Result<()>) -> bool {
        match result {
            Ok(()) => true,
            Err(e) => {
                warn!(action, error = %e, "storage rejected change, view left as is");
                false
            }
        }
    }
}
