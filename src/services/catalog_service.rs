use std::sync::Arc;

use crate::errors::LibraryResult;
use crate::services::{SearchResult, ValidationService};
use crate::store::{Author, Book, Store};

/// Read-only queries over the store
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<Store>,
}

impl CatalogService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    /// All books in insertion order
    pub fn list_books(&self) -> Vec<Book> {
        self.store.books()
    }

    /// All authors in insertion order
    pub fn list_authors(&self) -> Vec<Author> {
        self.store.authors()
    }

    pub fn book_by_id(&self, id: &str) -> Option<Book> {
        self.store.book(id)
    }

    pub fn author_by_id(&self, id: &str) -> Option<Author> {
        self.store.author(id)
    }

    /// Books whose `author_id` matches, found by scanning every book
    ///
    /// The author's own `books` list is not consulted; it only reflects the
    /// books created together with the author.
    pub fn author_books(&self, author_id: &str) -> Vec<Book> {
        self.store.find_books(|book| book.author_id == author_id)
    }

    /// Case-insensitive substring search; matching books come before matching authors
    pub fn search(&self, text: Option<&str>) -> LibraryResult<Vec<SearchResult>> {
        let text = ValidationService::validate_search_text(text).inspect_err(|e| {
            tracing::warn!("Rejected search: {}", e);
        })?;
        let needle = text.to_lowercase();

        let (books, authors) = self.store.find_books_and_authors(
            |book| contains_ignore_case(&book.title, &needle),
            |author| contains_ignore_case(&author.name, &needle),
        );

        tracing::debug!(
            "Search '{}' matched {} books and {} authors",
            text,
            books.len(),
            authors.len()
        );

        let results: Vec<SearchResult> = books
            .into_iter()
            .map(SearchResult::from)
            .chain(authors.into_iter().map(SearchResult::from))
            .collect();
        tracing::trace!(
            "Search '{}' results: {:?}",
            text,
            results.iter().map(SearchResult::id).collect::<Vec<_>>()
        );
        Ok(results)
    }
}

/// `needle` must already be lowercase
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
