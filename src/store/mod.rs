//! In-memory book and author store
//!
//! Both tables are insertion-ordered maps behind a single `RwLock`. Readers
//! clone records out under the shared lock; every insertion validates the
//! whole batch first and then writes it under one exclusive lock, so callers
//! never observe a partially applied insert.

pub mod model;

use std::collections::HashSet;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;

use crate::errors::{EntityKind, LibraryError, LibraryResult};

pub use model::{Author, Book};

#[derive(Debug, Default)]
struct Tables {
    books: IndexMap<String, Book>,
    authors: IndexMap<String, Author>,
}

impl Tables {
    fn check_author(&self, author: &Author) -> LibraryResult<()> {
        if self.authors.contains_key(&author.id) {
            return Err(LibraryError::duplicate(EntityKind::Author, &author.id));
        }
        Ok(())
    }

    /// `pending_author` is an author being inserted in the same step.
    fn check_books(&self, books: &[Book], pending_author: Option<&str>) -> LibraryResult<()> {
        let mut seen = HashSet::with_capacity(books.len());

        for book in books {
            if self.books.contains_key(&book.id) || !seen.insert(book.id.as_str()) {
                return Err(LibraryError::duplicate(EntityKind::Book, &book.id));
            }

            let author_known = self.authors.contains_key(&book.author_id)
                || pending_author == Some(book.author_id.as_str());
            if !author_known {
                return Err(LibraryError::UnknownAuthor(book.author_id.clone()));
            }
        }

        Ok(())
    }

    fn put_author(&mut self, author: Author) {
        self.authors.insert(author.id.clone(), author);
    }

    fn put_books(&mut self, books: Vec<Book>) {
        self.books
            .extend(books.into_iter().map(|book| (book.id.clone(), book)));
    }
}

/// Sole owner of all book and author records
#[derive(Debug, Default)]
pub struct Store {
    tables: RwLock<Tables>,
}

impl Store {
    /// Create a store populated with seed records
    ///
    /// Authors are inserted before books, so seed books may reference any
    /// seed author. The same duplicate and author checks as for runtime
    /// insertions apply.
    pub fn with_seed(authors: Vec<Author>, books: Vec<Book>) -> LibraryResult<Self> {
        let store = Self::default();
        {
            let mut tables = store.write();
            for author in authors {
                tables.check_author(&author)?;
                tables.put_author(author);
            }
            tables.check_books(&books, None)?;
            tables.put_books(books);
        }

        tracing::debug!(
            "Store seeded with {} authors and {} books",
            store.author_count(),
            store.book_count()
        );
        Ok(store)
    }

    fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert a single author
    pub fn insert_author(&self, author: Author) -> LibraryResult<()> {
        let mut tables = self.write();
        tables.check_author(&author)?;
        tables.put_author(author);
        Ok(())
    }

    /// Insert a batch of books; nothing is inserted if any book is rejected
    pub fn insert_books(&self, books: Vec<Book>) -> LibraryResult<()> {
        let mut tables = self.write();
        tables.check_books(&books, None)?;
        tables.put_books(books);
        Ok(())
    }

    /// Insert an author together with its books as one step
    pub fn insert_author_with_books(&self, author: Author, books: Vec<Book>) -> LibraryResult<()> {
        let mut tables = self.write();
        tables.check_author(&author)?;
        tables.check_books(&books, Some(author.id.as_str()))?;
        tables.put_author(author);
        tables.put_books(books);
        Ok(())
    }

    pub fn books(&self) -> Vec<Book> {
        self.read().books.values().cloned().collect()
    }

    pub fn authors(&self) -> Vec<Author> {
        self.read().authors.values().cloned().collect()
    }

    pub fn book(&self, id: &str) -> Option<Book> {
        self.read().books.get(id).cloned()
    }

    pub fn author(&self, id: &str) -> Option<Author> {
        self.read().authors.get(id).cloned()
    }

    /// Scan all books in insertion order, keeping those matching `predicate`
    pub fn find_books<F>(&self, predicate: F) -> Vec<Book>
    where
        F: Fn(&Book) -> bool,
    {
        self.read()
            .books
            .values()
            .filter(|book| predicate(book))
            .cloned()
            .collect()
    }

    /// Scan books and authors under one read lock
    ///
    /// Both result sets come from the same committed state, so an author
    /// inserted together with its books is either seen with all of them or
    /// not at all.
    pub fn find_books_and_authors<B, A>(
        &self,
        book_predicate: B,
        author_predicate: A,
    ) -> (Vec<Book>, Vec<Author>)
    where
        B: Fn(&Book) -> bool,
        A: Fn(&Author) -> bool,
    {
        let tables = self.read();
        let books = tables
            .books
            .values()
            .filter(|book| book_predicate(book))
            .cloned()
            .collect();
        let authors = tables
            .authors
            .values()
            .filter(|author| author_predicate(author))
            .cloned()
            .collect();
        (books, authors)
    }

    pub fn book_count(&self) -> usize {
        self.read().books.len()
    }

    pub fn author_count(&self) -> usize {
        self.read().authors.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;
    use std::thread;

    fn sample_store() -> Store {
        Store::with_seed(
            vec![Author::new(
                "author_1",
                "Gabriel García Márquez",
                vec!["book_1".to_string(), "book_2".to_string()],
            )],
            vec![
                Book::new("book_1", "Cien años De soledad", "author_1"),
                Book::new("book_2", "El amor en los tiempos del cólera", "author_1"),
            ],
        )
        .expect("seed should be valid")
    }

    #[test]
    fn test_seed_keeps_insertion_order() {
        let store = sample_store();
        let ids: Vec<String> = store.books().into_iter().map(|b| b.id).collect();
        assert_eq!(ids, vec!["book_1", "book_2"]);
        assert_eq!(store.author_count(), 1);
    }

    #[test]
    fn test_seed_rejects_book_with_unknown_author() {
        let err = Store::with_seed(vec![], vec![Book::new("book_1", "Orphan", "nobody")])
            .unwrap_err();
        assert_eq!(err, LibraryError::UnknownAuthor("nobody".to_string()));
    }

    #[test]
    fn test_insert_author_rejects_duplicate_id() {
        let store = sample_store();
        let err = store
            .insert_author(Author::new("author_1", "Impostor", vec![]))
            .unwrap_err();

        assert_eq!(err, LibraryError::duplicate(EntityKind::Author, "author_1"));
        assert_eq!(store.author("author_1").unwrap().name, "Gabriel García Márquez");
    }

    #[test]
    fn test_insert_books_is_all_or_nothing() {
        let store = sample_store();
        let err = store
            .insert_books(vec![
                Book::new("book_3", "Relato de un náufrago", "author_1"),
                Book::new("book_1", "Collides", "author_1"),
            ])
            .unwrap_err();

        assert_eq!(err, LibraryError::duplicate(EntityKind::Book, "book_1"));
        assert!(store.book("book_3").is_none());
        assert_eq!(store.book_count(), 2);
    }

    #[test]
    fn test_insert_books_rejects_repeated_id_in_batch() {
        let store = sample_store();
        let err = store
            .insert_books(vec![
                Book::new("book_3", "One", "author_1"),
                Book::new("book_3", "Two", "author_1"),
            ])
            .unwrap_err();

        assert_eq!(err, LibraryError::duplicate(EntityKind::Book, "book_3"));
        assert_eq!(store.book_count(), 2);
    }

    #[test]
    fn test_later_books_do_not_touch_author_snapshot() {
        let store = sample_store();
        store
            .insert_books(vec![Book::new("book_3", "Relato de un náufrago", "author_1")])
            .unwrap();

        assert_eq!(store.author("author_1").unwrap().books.len(), 2);
        assert_eq!(store.find_books(|b| b.author_id == "author_1").len(), 3);
    }

    #[test]
    fn test_insert_author_with_books_accepts_pending_author() {
        let store = sample_store();
        store
            .insert_author_with_books(
                Author::new("author_2", "Isabel Allende", vec!["book_3".to_string()]),
                vec![Book::new("book_3", "La casa de los espíritus", "author_2")],
            )
            .unwrap();

        assert_eq!(store.author_count(), 2);
        assert_eq!(store.book("book_3").unwrap().author_id, "author_2");
    }

    #[test]
    fn test_insert_author_with_books_leaves_store_untouched_on_error() {
        let store = sample_store();
        let err = store
            .insert_author_with_books(
                Author::new("author_2", "Isabel Allende", vec!["book_1".to_string()]),
                vec![Book::new("book_1", "Collides", "author_2")],
            )
            .unwrap_err();

        assert_eq!(err, LibraryError::duplicate(EntityKind::Book, "book_1"));
        assert!(store.author("author_2").is_none());
    }

    #[test]
    fn test_returned_records_are_copies() {
        let store = sample_store();
        let mut book = store.book("book_1").unwrap();
        book.title = "Changed".to_string();

        assert_eq!(store.book("book_1").unwrap().title, "Cien años De soledad");
    }

    #[test]
    fn test_joint_scan_sees_whole_batches_while_writers_run() {
        const WRITERS: usize = 4;
        const AUTHORS_PER_WRITER: usize = 50;
        const BOOKS_PER_AUTHOR: usize = 20;

        let store = Arc::new(Store::default());
        let writers: Vec<_> = (0..WRITERS)
            .map(|w| {
                let store = store.clone();
                thread::spawn(move || {
                    for a in 0..AUTHORS_PER_WRITER {
                        let author_id = format!("author_{}_{}", w, a);
                        let books: Vec<Book> = (0..BOOKS_PER_AUTHOR)
                            .map(|b| {
                                Book::new(format!("{}_book_{}", author_id, b), "Title", author_id.as_str())
                            })
                            .collect();
                        let ids = books.iter().map(|b| b.id.clone()).collect();
                        let author = Author::new(author_id.as_str(), "Writer", ids);
                        store.insert_author_with_books(author, books).unwrap();
                    }
                })
            })
            .collect();

        while store.author_count() < WRITERS * AUTHORS_PER_WRITER {
            let (books, authors) = store.find_books_and_authors(|_| true, |_| true);
            assert_eq!(books.len(), authors.len() * BOOKS_PER_AUTHOR);
        }

        for writer in writers {
            writer.join().unwrap();
        }
        assert_eq!(store.book_count(), WRITERS * AUTHORS_PER_WRITER * BOOKS_PER_AUTHOR);
    }

    #[test]
    fn test_concurrent_inserts_of_same_id_admit_one() {
        let store = Arc::new(sample_store());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                thread::spawn(move || {
                    store.insert_author(Author::new("author_2", format!("Writer {}", i), vec![]))
                })
            })
            .collect();

        let accepted = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(Result::is_ok)
            .count();
        assert_eq!(accepted, 1);
        assert_eq!(store.author_count(), 2);
    }
}
