use async_graphql::*;

use crate::graphql::context::GraphQLContext;
use crate::graphql::types::Book;
use crate::store;

#[derive(Clone, Debug, SimpleObject)]
#[graphql(complex)]
pub struct Author {
    pub id: String,
    pub name: String,
    /// Ids of the books created together with this author
    pub book_ids: Vec<String>,
}

impl From<store::Author> for Author {
    fn from(author: store::Author) -> Self {
        Self {
            id: author.id,
            name: author.name,
            book_ids: author.books,
        }
    }
}

#[ComplexObject]
impl Author {
    /// Every stored book whose `authorId` is this author
    async fn books(&self, ctx: &Context<'_>) -> Result<Vec<Book>> {
        let context = ctx.data::<GraphQLContext>()?;
        let books = context.app.catalog_service().author_books(&self.id);

        Ok(books.into_iter().map(Book::from).collect())
    }
}
