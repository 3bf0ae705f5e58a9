use async_graphql::*;

use crate::graphql::types::{Author, Book};
use crate::services;

#[derive(Clone, Debug, Union)]
pub enum SearchResult {
    Book(Book),
    Author(Author),
}

impl From<services::SearchResult> for SearchResult {
    fn from(result: services::SearchResult) -> Self {
        match result {
            services::SearchResult::Book(book) => SearchResult::Book(book.into()),
            services::SearchResult::Author(author) => SearchResult::Author(author.into()),
        }
    }
}
