//! Shelf
//!
//! Rendered state of the two book lists.

use std::fmt;

use crate::book::Book;

/// One rendered book
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookCard {
    pub book: Book,
    /// Hidden by the current search filter
    pub hidden: bool,
}

impl BookCard {
    fn new(book: Book) -> Self {
        Self {
            book,
            hidden: false,
        }
    }

    /// Case-insensitive substring match on the visible title and info line
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.book.title.to_lowercase().contains(&query)
            || self.book.information().to_lowercase().contains(&query)
    }

    /// Label of the move control
    pub fn move_label(&self) -> &'static str {
        if self.book.is_complete {
            "To Read"
        } else {
            "Finished"
        }
    }
}

/// The "finished" and "unfinished" partitions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shelf {
    finished: Vec<BookCard>,
    unfinished: Vec<BookCard>,
}

impl Shelf {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear both partitions and render `books` in the given order
    pub fn render(&mut self, books: impl IntoIterator<Item = Book>) {
        self.finished.clear();
        self.unfinished.clear();
        for book in books {
            self.append(book);
        }
    }

    /// Append one card to the end of its partition
    pub fn append(&mut self, book: Book) {
        let card = BookCard::new(book);
        if card.book.is_complete {
            self.finished.push(card);
        } else {
            self.unfinished.push(card);
        }
    }

    /// Drop the card for `id`, returns whether one was rendered
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.len();
        self.finished.retain(|card| card.book.id != id);
        self.unfinished.retain(|card| card.book.id != id);
        self.len() != before
    }

    /// Hide cards that do not match `query`, show the rest
    pub fn filter(&mut self, query: &str) {
        for card in self.finished.iter_mut().chain(self.unfinished.iter_mut()) {
            card.hidden = !card.matches(query);
        }
    }

    /// Rendered book by id
    pub fn find(&self, id: i64) -> Option<&BookCard> {
        self.cards().find(|card| card.book.id == id)
    }

    pub fn finished(&self) -> &[BookCard] {
        &self.finished
    }

    pub fn unfinished(&self) -> &[BookCard] {
        &self.unfinished
    }

    /// All cards, finished partition first
    pub fn cards(&self) -> impl Iterator<Item = &BookCard> {
        self.finished.iter().chain(self.unfinished.iter())
    }

    /// Cards not hidden by the filter
    pub fn visible(&self) -> impl Iterator<Item = &BookCard> {
        self.cards().filter(|card| !card.hidden)
    }

    pub fn len(&self) -> usize {
        self.finished.len() + self.unfinished.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Shelf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_partition(f, "Unfinished", &self.unfinished)?;
        writeln!(f)?;
        write_partition(f, "Finished", &self.finished)
    }
}

fn write_partition(f: &mut fmt::Formatter<'_>, heading: &str, cards: &[BookCard]) -> fmt::Result {
    writeln!(f, "{}", heading)?;
    let mut shown = 0;
    for card in cards.iter().filter(|card| !card.hidden) {
        writeln!(
            f,
            "  {:>13}  {}  {}  [{}]",
            card.book.id,
            card.book.title,
            card.book.information(),
            card.move_label()
        )?;
        shown += 1;
    }
    if shown == 0 {
        writeln!(f, "  (none)")?;
    }
    Ok(())
}
