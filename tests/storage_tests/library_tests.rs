//! Tests for Library
//!
//! These tests verify:
//! - Add / update / delete semantics
//! - Sorting by title on every read
//! - First-load seeding and its idempotence
//! - Behaviour when the slot is unavailable or holds bad data
//! - Persistence through a file-backed slot

use booktrack::storage::{FileSlot, Library, MemorySlot, StorageSlot};
use booktrack::{Book, BookError};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_library() -> Library<MemorySlot> {
    Library::new(MemorySlot::new())
}

fn book(id: i64, title: &str, is_complete: bool) -> Book {
    Book::new(id, title, "Some Author", 2000, is_complete)
}

fn raw_blob(library: &Library<MemorySlot>) -> Option<String> {
    library.slot().get(library.key()).unwrap()
}

// =============================================================================
// Add / List Tests
// =============================================================================

#[test]
fn test_list_empty_when_key_absent() {
    let library = setup_library();
    assert!(library.list().is_empty());
}

#[test]
fn test_add_then_list_round_trips_fields() {
    let library = setup_library();
    let added = Book::new(1700000000000, "Laut Bercerita", "Leila S. Chudori", 2017, false);

    library.add(&added).unwrap();

    assert_eq!(library.list(), vec![added]);
}

#[test]
fn test_list_sorted_by_title() {
    let library = setup_library();

    library.add(&book(1, "Z", false)).unwrap();
    library.add(&book(2, "A", false)).unwrap();

    let titles: Vec<String> = library.list().into_iter().map(|b| b.title).collect();
    assert_eq!(titles, vec!["A", "Z"]);
}

#[test]
fn test_sort_is_case_sensitive() {
    let library = setup_library();

    library.add(&book(1, "apple", false)).unwrap();
    library.add(&book(2, "Banana", false)).unwrap();
    library.add(&book(3, "Apple", false)).unwrap();

    let titles: Vec<String> = library.list().into_iter().map(|b| b.title).collect();
    assert_eq!(titles, vec!["Apple", "Banana", "apple"]);
}

#[test]
fn test_list_is_non_decreasing_for_seed_and_additions() {
    let library = setup_library();
    library.prepopulate_on_first_load();
    library.add(&book(100, "Ayat-Ayat Cinta", true)).unwrap();
    library.add(&book(101, "zen", false)).unwrap();
    library.add(&book(102, "", false)).unwrap();

    let books = library.list();
    assert!(books.windows(2).all(|pair| pair[0].title <= pair[1].title));
}

#[test]
fn test_equal_titles_keep_stored_order() {
    let library = setup_library();

    library.add(&book(2, "Same", false)).unwrap();
    library.add(&book(1, "Same", true)).unwrap();

    let ids: Vec<i64> = library.list().into_iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![2, 1]);
}

#[test]
fn test_add_does_not_check_duplicate_ids() {
    let library = setup_library();

    library.add(&book(1, "First", false)).unwrap();
    library.add(&book(1, "Second", false)).unwrap();

    assert_eq!(library.list().len(), 2);
}

#[test]
fn test_persisted_layout_uses_camel_case() {
    let library = setup_library();
    library.add(&Book::new(5, "T", "A", 1999, true)).unwrap();

    assert_eq!(
        raw_blob(&library).unwrap(),
        r#"[{"id":5,"title":"T","author":"A","year":1999,"isComplete":true}]"#
    );
}

// =============================================================================
// Update Tests
// =============================================================================

#[test]
fn test_update_replaces_only_matching_entry() {
    let library = setup_library();
    library.add(&book(1, "One", false)).unwrap();
    library.add(&book(2, "Two", false)).unwrap();
    library.add(&book(3, "Three", true)).unwrap();

    let edited = Book::new(2, "Two (2nd ed.)", "Other", 2021, true);
    library.update(&edited).unwrap();

    let books = library.list();
    assert_eq!(books.len(), 3);
    assert_eq!(library.get(2), Some(edited));
    assert_eq!(library.get(1), Some(book(1, "One", false)));
    assert_eq!(library.get(3), Some(book(3, "Three", true)));
}

#[test]
fn test_update_missing_id_fails_without_writing() {
    let library = setup_library();
    library.add(&book(1, "One", false)).unwrap();
    let before = raw_blob(&library);

    let result = library.update(&book(99, "Ghost", true));

    assert!(matches!(result, Err(BookError::NotFound(99))));
    assert_eq!(raw_blob(&library), before);
}

#[test]
fn test_move_toggle_through_update() {
    let library = setup_library();
    let unread = book(1, "Pulang", false);
    library.add(&unread).unwrap();

    library.update(&unread.toggled()).unwrap();

    let matching: Vec<Book> = library.list().into_iter().filter(|b| b.id == 1).collect();
    assert_eq!(matching.len(), 1);
    assert!(matching[0].is_complete);
}

#[test]
fn test_update_replaces_first_of_duplicate_ids() {
    let library = setup_library();
    library.add(&book(7, "B first", false)).unwrap();
    library.add(&book(7, "A second", false)).unwrap();

    library.update(&book(7, "C replaced", true)).unwrap();

    let titles: Vec<String> = library.list().into_iter().map(|b| b.title).collect();
    assert_eq!(titles, vec!["A second", "C replaced"]);
}

// =============================================================================
// Delete Tests
// =============================================================================

#[test]
fn test_delete_removes_book() {
    let library = setup_library();
    library.add(&book(1, "One", false)).unwrap();
    library.add(&book(2, "Two", false)).unwrap();

    library.delete(1).unwrap();

    assert_eq!(library.list(), vec![book(2, "Two", false)]);
}

#[test]
fn test_delete_removes_all_entries_with_id() {
    let library = setup_library();
    library.add(&book(1, "One", false)).unwrap();
    library.add(&book(1, "Again", true)).unwrap();

    library.delete(1).unwrap();

    assert!(library.list().is_empty());
}

#[test]
fn test_delete_missing_id_is_success() {
    let library = setup_library();
    library.add(&book(1, "One", false)).unwrap();
    let before = library.list();

    library.delete(404).unwrap();

    assert_eq!(library.list(), before);
}

// =============================================================================
// Seeding Tests
// =============================================================================

#[test]
fn test_prepopulate_writes_seed_set() {
    let library = setup_library();

    library.prepopulate_on_first_load();

    let books = library.list();
    let titles: Vec<&str> = books.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Atomic Habits",
            "Bumi Manusia",
            "Cantik Itu Luka",
            "Clean Code",
            "Filosofi Teras",
            "Laskar Pelangi",
            "Negeri 5 Menara",
            "Ronggeng Dukuh Paruk",
            "Sapiens",
            "The Pragmatic Programmer",
        ]
    );

    let finished: Vec<&str> = books
        .iter()
        .filter(|b| b.is_complete)
        .map(|b| b.title.as_str())
        .collect();
    let unfinished: Vec<&str> = books
        .iter()
        .filter(|b| !b.is_complete)
        .map(|b| b.title.as_str())
        .collect();
    assert_eq!(
        finished,
        vec![
            "Atomic Habits",
            "Bumi Manusia",
            "Filosofi Teras",
            "Laskar Pelangi",
            "The Pragmatic Programmer",
        ]
    );
    assert_eq!(
        unfinished,
        vec![
            "Cantik Itu Luka",
            "Clean Code",
            "Negeri 5 Menara",
            "Ronggeng Dukuh Paruk",
            "Sapiens",
        ]
    );
}

#[test]
fn test_prepopulate_is_idempotent() {
    let library = setup_library();

    library.prepopulate_on_first_load();
    library.prepopulate_on_first_load();

    assert_eq!(library.list().len(), 10);
}

#[test]
fn test_prepopulate_skips_existing_empty_collection() {
    let library = setup_library();
    library.add(&book(1, "Only", false)).unwrap();
    library.delete(1).unwrap();

    library.prepopulate_on_first_load();

    assert!(library.list().is_empty());
}

#[test]
fn test_seed_stores_finished_before_unfinished() {
    let library = setup_library();
    library.prepopulate_on_first_load();

    let stored: Vec<Book> = serde_json::from_str(&raw_blob(&library).unwrap()).unwrap();
    let first_unfinished = stored.iter().position(|b| !b.is_complete).unwrap();
    assert!(stored[..first_unfinished].iter().all(|b| b.is_complete));
    assert!(stored[first_unfinished..].iter().all(|b| !b.is_complete));
}

// =============================================================================
// Unavailable Storage Tests
// =============================================================================

#[test]
fn test_unavailable_slot_fails_mutations() {
    let library = setup_library();
    library.slot().set_available(false);

    assert!(matches!(
        library.add(&book(1, "One", false)),
        Err(BookError::StorageUnavailable(_))
    ));
    assert!(matches!(
        library.update(&book(1, "One", false)),
        Err(BookError::StorageUnavailable(_))
    ));
    assert!(matches!(library.delete(1), Err(BookError::StorageUnavailable(_))));
}

#[test]
fn test_unavailable_slot_lists_empty_and_skips_seed() {
    let library = setup_library();
    library.slot().set_available(false);

    library.prepopulate_on_first_load();
    assert!(library.list().is_empty());

    library.slot().set_available(true);
    assert_eq!(raw_blob(&library), None);
}

// =============================================================================
// Validation Tests
// =============================================================================

#[test]
fn test_invalid_records_are_hidden_from_list() {
    let library = setup_library();
    library
        .slot()
        .set(
            library.key(),
            r#"[{"id":1,"title":"Good","author":"A","year":2000,"isComplete":true},
                {"title":"No id","author":"A","year":2000,"isComplete":true},
                {"id":3,"title":"Year as text","author":"A","year":"2000","isComplete":false}]"#,
        )
        .unwrap();

    let books = library.list();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].id, 1);
}

#[test]
fn test_invalid_records_survive_mutations() {
    let library = setup_library();
    let unreadable = serde_json::json!({
        "id": 2,
        "title": "From browser",
        "author": "A",
        "year": null,
        "isComplete": false
    });
    let fractional = serde_json::json!({
        "id": 4,
        "title": "Half year",
        "author": "B",
        "year": 1999.5,
        "isComplete": true
    });
    let stored = serde_json::json!([
        {"id": 1, "title": "Valid", "author": "A", "year": 2000, "isComplete": false},
        unreadable,
        fractional
    ]);
    library.slot().set(library.key(), &stored.to_string()).unwrap();

    library.add(&book(3, "New", false)).unwrap();
    library.update(&book(1, "Valid (edited)", true)).unwrap();
    library.delete(3).unwrap();

    let raw: Vec<serde_json::Value> = serde_json::from_str(&raw_blob(&library).unwrap()).unwrap();
    assert_eq!(raw.len(), 3);
    assert_eq!(raw[1], unreadable);
    assert_eq!(raw[2], fractional);

    let titles: Vec<String> = library.list().into_iter().map(|b| b.title).collect();
    assert_eq!(titles, vec!["Valid (edited)"]);
}

#[test]
fn test_update_ignores_unreadable_record_with_same_id() {
    let library = setup_library();
    library
        .slot()
        .set(
            library.key(),
            r#"[{"id":2,"title":"Broken","author":"A","year":null,"isComplete":false}]"#,
        )
        .unwrap();
    let before = raw_blob(&library);

    let result = library.update(&book(2, "Replacement", true));

    assert!(matches!(result, Err(BookError::NotFound(2))));
    assert_eq!(raw_blob(&library), before);
}

#[test]
fn test_corrupted_blob_lists_empty_and_blocks_writes() {
    let library = setup_library();
    library.slot().set(library.key(), "not json at all").unwrap();

    assert!(library.list().is_empty());
    assert!(matches!(
        library.add(&book(1, "One", false)),
        Err(BookError::Corrupted(_))
    ));
    assert_eq!(raw_blob(&library).as_deref(), Some("not json at all"));
}

#[test]
fn test_blank_blob_reads_as_empty() {
    let library = setup_library();
    library.slot().set(library.key(), "").unwrap();

    library.add(&book(1, "One", false)).unwrap();

    assert_eq!(library.list().len(), 1);
}

// =============================================================================
// File-backed Persistence Tests
// =============================================================================

#[test]
fn test_file_slot_persists_across_reopen() {
    let temp_dir = TempDir::new().unwrap();

    {
        let library = Library::new(FileSlot::open(temp_dir.path()).unwrap());
        library.prepopulate_on_first_load();
        library.add(&book(1, "AAA", false)).unwrap();
    }

    let library = Library::new(FileSlot::open(temp_dir.path()).unwrap());
    library.prepopulate_on_first_load();

    let books = library.list();
    assert_eq!(books.len(), 11);
    assert_eq!(books[0].title, "AAA");
}

#[test]
fn test_custom_key_is_isolated() {
    let slot = MemorySlot::new();
    slot.set("books", "[]").unwrap();
    let library = Library::with_key(slot, "reading-list");

    library.prepopulate_on_first_load();

    assert_eq!(library.key(), "reading-list");
    assert_eq!(library.list().len(), 10);
    assert_eq!(library.slot().get("books").unwrap().as_deref(), Some("[]"));
}
