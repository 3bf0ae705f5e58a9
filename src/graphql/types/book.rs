use async_graphql::*;

use crate::graphql::context::GraphQLContext;
use crate::graphql::types::Author;
use crate::store;

#[derive(Clone, Debug, SimpleObject)]
#[graphql(complex)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author_id: String,
}

impl From<store::Book> for Book {
    fn from(book: store::Book) -> Self {
        Self {
            id: book.id,
            title: book.title,
            author_id: book.author_id,
        }
    }
}

#[ComplexObject]
impl Book {
    /// The author referenced by `authorId`, if it is stored
    async fn author(&self, ctx: &Context<'_>) -> Result<Option<Author>> {
        let context = ctx.data::<GraphQLContext>()?;
        let author = context
            .app
            .catalog_service()
            .author_by_id(&self.author_id);

        Ok(author.map(Author::from))
    }
}

/// A book created together with its author
#[derive(InputObject, Clone, Debug)]
pub struct BookInput {
    pub title: String,
}
