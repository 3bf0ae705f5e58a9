use async_graphql::*;

use crate::errors::ToGraphQLError;
use crate::graphql::context::GraphQLContext;
use crate::graphql::types::{Author, BookInput};

#[derive(Default)]
pub struct AuthorMutation;

#[Object]
impl AuthorMutation {
    /// Create an author together with its books
    #[graphql(name = "addAuthor")]
    async fn add_author(
        &self,
        ctx: &Context<'_>,
        name: Option<String>,
        books: Option<Vec<BookInput>>,
    ) -> Result<Author> {
        let context = ctx.data::<GraphQLContext>()?;
        let titles: Vec<String> = books
            .unwrap_or_default()
            .into_iter()
            .map(|book| book.title)
            .collect();

        let author = context
            .app
            .author_service()
            .add_author(name.as_deref(), &titles)
            .map_err(|e| e.to_graphql_error())?;

        Ok(Author::from(author))
    }
}
