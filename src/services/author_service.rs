use std::sync::Arc;

use uuid::Uuid;

use crate::errors::LibraryResult;
use crate::services::ValidationService;
use crate::store::{Author, Book, Store};

/// Write operations over the store
#[derive(Clone)]
pub struct AuthorService {
    store: Arc<Store>,
}

impl AuthorService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    /// Create an author together with one new book per title
    ///
    /// The author's `books` list holds the new book ids in title order. All
    /// arguments are validated before anything is written, and the author and
    /// its books are inserted in a single store step.
    pub fn add_author(&self, name: Option<&str>, book_titles: &[String]) -> LibraryResult<Author> {
        let name = ValidationService::validate_author_name(name)?;
        let titles = book_titles
            .iter()
            .map(|title| ValidationService::validate_book_title(title))
            .collect::<LibraryResult<Vec<_>>>()?;

        let author_id = new_id();
        let books: Vec<Book> = titles
            .into_iter()
            .map(|title| Book::new(new_id(), title, author_id.as_str()))
            .collect();
        let author = Author::new(
            author_id,
            name,
            books.iter().map(|book| book.id.clone()).collect(),
        );

        self.store
            .insert_author_with_books(author.clone(), books)
            .inspect_err(|e| tracing::warn!("Failed to add author '{}': {}", author.name, e))?;

        tracing::info!(
            "Created author {} ('{}') with {} books",
            author.id,
            author.name,
            author.books.len()
        );
        Ok(author)
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SeedData;
    use crate::services::CatalogService;

    fn services() -> (AuthorService, CatalogService) {
        let seed = SeedData::default();
        let store = Arc::new(Store::with_seed(seed.authors, seed.books).unwrap());
        (
            AuthorService::new(store.clone()),
            CatalogService::new(store),
        )
    }

    #[test]
    fn test_add_author_creates_books() {
        let (authors, catalog) = services();
        let titles = vec!["T1".to_string(), "T2".to_string()];

        let author = authors.add_author(Some("New Author"), &titles).unwrap();

        assert_eq!(author.name, "New Author");
        assert_eq!(author.books.len(), 2);
        for (book_id, title) in author.books.iter().zip(&titles) {
            let book = catalog.book_by_id(book_id).unwrap();
            assert_eq!(&book.title, title);
            assert_eq!(book.author_id, author.id);
        }

        let new_books: Vec<Book> = catalog
            .list_books()
            .into_iter()
            .filter(|b| b.author_id == author.id)
            .collect();
        assert_eq!(new_books.len(), 2);
        assert_eq!(catalog.author_by_id(&author.id), Some(author));
    }

    #[test]
    fn test_add_author_without_books() {
        let (authors, catalog) = services();
        let author = authors.add_author(Some("Juan Rulfo"), &[]).unwrap();

        assert!(author.books.is_empty());
        assert!(catalog.author_books(&author.id).is_empty());
        assert_eq!(catalog.list_authors().len(), 2);
    }

    #[test]
    fn test_add_author_requires_name() {
        let (authors, catalog) = services();

        let err = authors.add_author(None, &[]).unwrap_err();
        assert!(err.is_client_error());
        let err = authors.add_author(Some("  "), &["T1".to_string()]).unwrap_err();
        assert!(err.is_client_error());

        assert_eq!(catalog.list_authors().len(), 1);
        assert_eq!(catalog.list_books().len(), 2);
    }

    #[test]
    fn test_blank_title_rejects_whole_request() {
        let (authors, catalog) = services();
        let titles = vec!["Pedro Páramo".to_string(), " ".to_string()];

        assert!(authors.add_author(Some("Juan Rulfo"), &titles).is_err());
        assert_eq!(catalog.list_authors().len(), 1);
        assert_eq!(catalog.list_books().len(), 2);
    }

    #[test]
    fn test_name_and_titles_are_stored_as_given() {
        let (authors, catalog) = services();
        let titles = vec![" Aura ".to_string()];

        let author = authors.add_author(Some(" Carlos Fuentes"), &titles).unwrap();

        assert_eq!(catalog.author_by_id(&author.id).unwrap().name, " Carlos Fuentes");
        assert_eq!(catalog.book_by_id(&author.books[0]).unwrap().title, " Aura ");
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let (authors, _) = services();
        let titles = vec!["A".to_string(), "A".to_string(), "A".to_string()];

        let first = authors.add_author(Some("One"), &titles).unwrap();
        let second = authors.add_author(Some("One"), &titles).unwrap();

        assert_ne!(first.id, second.id);
        let mut ids: Vec<&String> = first.books.iter().chain(&second.books).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 6);
    }
}
