use crate::store::{Author, Book};

/// One element of a search response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    Book(Book),
    Author(Author),
}

/// Discriminant of a `SearchResult`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultKind {
    Book,
    Author,
}

impl SearchResult {
    pub fn kind(&self) -> ResultKind {
        match self {
            SearchResult::Book(_) => ResultKind::Book,
            SearchResult::Author(_) => ResultKind::Author,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            SearchResult::Book(book) => &book.id,
            SearchResult::Author(author) => &author.id,
        }
    }
}

impl From<Book> for SearchResult {
    fn from(book: Book) -> Self {
        SearchResult::Book(book)
    }
}

impl From<Author> for SearchResult {
    fn from(author: Author) -> Self {
        SearchResult::Author(author)
    }
}
