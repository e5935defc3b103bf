//! End-to-end tests driving the Library facade the way the UI layer does:
//! mutate, reopen from the saved files, and check what comes back.

use booktrack_core::{Book, BookKind, BookStatus, Genre, Library, TextStore};
use std::fs;
use std::path::Path;

fn store_at(dir: &Path) -> TextStore {
    TextStore::new(dir.join("books.txt"), dir.join("genres.txt"))
}

#[test]
fn register_save_and_reload_a_book_with_a_quote() {
    let dir = tempfile::tempdir().unwrap();
    let mut library = Library::open(store_at(dir.path()));

    let scifi = Genre::new("Sci-Fi");
    library.add_genre(scifi.clone()).unwrap();

    let mut dune = Book::new(
        BookKind::Physical,
        "Dune",
        "Herbert",
        412,
        "Ace",
        "...",
        Some(scifi),
    );
    dune.add_quote("Fear is the mind-killer");
    library.add_book(dune.clone()).unwrap();

    // Fresh facade, reading back from the files just written.
    let reopened = Library::open(store_at(dir.path()));
    let books = reopened.books();
    assert_eq!(books.len(), 1);

    let reloaded = &books[0];
    assert_eq!(reloaded.title, "Dune");
    assert_eq!(reloaded.author, "Herbert");
    assert_eq!(reloaded.total_pages, 412);
    assert_eq!(reloaded.genre.as_ref().unwrap().name, "Sci-Fi");
    assert_eq!(reloaded.quotes, vec!["Fear is the mind-killer"]);
    assert_eq!(reloaded, &dune);
}

#[test]
fn every_mutation_rewrites_the_files() {
    let dir = tempfile::tempdir().unwrap();
    let mut library = Library::open(store_at(dir.path()));

    library.add_genre(Genre::new("Fiction")).unwrap();
    let book = Book::new(BookKind::Physical, "First", "A", 10, "P", "", None);
    library.add_book(book.clone()).unwrap();
    assert!(fs::read_to_string(dir.path().join("books.txt"))
        .unwrap()
        .contains("TITLE: First"));

    let mut renamed = book.clone();
    renamed.title = "Second".to_string();
    library.update_book(renamed).unwrap();
    let on_disk = fs::read_to_string(dir.path().join("books.txt")).unwrap();
    assert!(on_disk.contains("TITLE: Second"));
    assert!(!on_disk.contains("TITLE: First"));

    library.delete_book(&book).unwrap();
    let on_disk = fs::read_to_string(dir.path().join("books.txt")).unwrap();
    assert!(!on_disk.contains("BOOK_START"));
}

#[test]
fn reading_progress_survives_reload() {
    let dir = tempfile::tempdir().unwrap();
    let mut library = Library::open(store_at(dir.path()));

    let book = Book::new(BookKind::Physical, "Progress", "A", 300, "P", "", None);
    library.add_book(book.clone()).unwrap();

    let mut progressed = book;
    progressed.current_page = 150;
    progressed.status = BookStatus::Reading;
    assert!(library.update_book(progressed).unwrap());

    let reopened = Library::open(store_at(dir.path()));
    let books = reopened.books();
    assert_eq!(books[0].current_page, 150);
    assert_eq!(books[0].status, BookStatus::Reading);
}

#[test]
fn unreadable_book_file_still_opens_the_library() {
    let dir = tempfile::tempdir().unwrap();
    let mut library = Library::open(store_at(dir.path()));
    library.add_genre(Genre::new("Fiction")).unwrap();

    // Corrupt the book file so its load fails with a parse error.
    fs::write(
        dir.path().join("books.txt"),
        "BOOK_START: PHYSICAL\nRATING: five\nBOOK_END\n",
    )
    .unwrap();

    let reopened = Library::open(store_at(dir.path()));
    assert!(reopened.books().is_empty());
    // The genre file was unaffected and still loads.
    assert_eq!(reopened.genres().len(), 1);
}
