//! Sample books written on first load
//!
//! A small bilingual (Indonesian/English) set, finished books first.

use crate::book::Book;

/// Books already read
pub fn finished_books() -> Vec<Book> {
    vec![
        Book::new(1657184400000, "Laskar Pelangi", "Andrea Hirata", 2005, true),
        Book::new(1657184400001, "Bumi Manusia", "Pramoedya Ananta Toer", 1980, true),
        Book::new(1657184400002, "Atomic Habits", "James Clear", 2018, true),
        Book::new(1657184400003, "Filosofi Teras", "Henry Manampiring", 2018, true),
        Book::new(1657184400004, "The Pragmatic Programmer", "Andrew Hunt", 1999, true),
    ]
}

/// Books still on the reading list
pub fn unfinished_books() -> Vec<Book> {
    vec![
        Book::new(1657184400005, "Cantik Itu Luka", "Eka Kurniawan", 2002, false),
        Book::new(1657184400006, "Ronggeng Dukuh Paruk", "Ahmad Tohari", 1982, false),
        Book::new(1657184400007, "Clean Code", "Robert C. Martin", 2008, false),
        Book::new(1657184400008, "Sapiens", "Yuval Noah Harari", 2011, false),
        Book::new(1657184400009, "Negeri 5 Menara", "Ahmad Fuadi", 2009, false),
    ]
}

/// Full seed set in storage order
pub fn seed_books() -> Vec<Book> {
    let mut books = finished_books();
    books.extend(unfinished_books());
    books
}
