use async_graphql::*;

use crate::errors::ToGraphQLError;
use crate::graphql::context::GraphQLContext;
use crate::graphql::types::{Author, Book, SearchResult};

pub struct Query;

#[Object]
impl Query {
    /// Get all books
    async fn books(&self, ctx: &Context<'_>) -> Result<Vec<Book>> {
        let context = ctx.data::<GraphQLContext>()?;
        let books = context.app.catalog_service().list_books();

        Ok(books.into_iter().map(Book::from).collect())
    }

    /// Get all authors
    async fn authors(&self, ctx: &Context<'_>) -> Result<Vec<Author>> {
        let context = ctx.data::<GraphQLContext>()?;
        let authors = context.app.catalog_service().list_authors();

        Ok(authors.into_iter().map(Author::from).collect())
    }

    /// Get a specific book by ID
    async fn book(&self, ctx: &Context<'_>, id: String) -> Result<Option<Book>> {
        let context = ctx.data::<GraphQLContext>()?;
        let book = context.app.catalog_service().book_by_id(&id);

        Ok(book.map(Book::from))
    }

    /// Get a specific author by ID
    async fn author(&self, ctx: &Context<'_>, id: String) -> Result<Option<Author>> {
        let context = ctx.data::<GraphQLContext>()?;
        let author = context.app.catalog_service().author_by_id(&id);

        Ok(author.map(Author::from))
    }

    /// Get all books written by an author
    #[graphql(name = "authorBooks")]
    async fn author_books(&self, ctx: &Context<'_>, author_id: String) -> Result<Vec<Book>> {
        let context = ctx.data::<GraphQLContext>()?;
        let books = context.app.catalog_service().author_books(&author_id);

        Ok(books.into_iter().map(Book::from).collect())
    }

    /// Search book titles and author names, books first
    async fn search(&self, ctx: &Context<'_>, text: Option<String>) -> Result<Vec<SearchResult>> {
        let context = ctx.data::<GraphQLContext>()?;
        let results = context
            .app
            .catalog_service()
            .search(text.as_deref())
            .map_err(|e| e.to_graphql_error())?;

        Ok(results.into_iter().map(SearchResult::from).collect())
    }
}
