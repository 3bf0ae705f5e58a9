//! Common error utilities and GraphQL conversion
//!
//! ```rust
//! use bookshelf::errors::{LibraryError, ToGraphQLError};
//!
//! let err = LibraryError::UnknownAuthor("author_1".to_string());
//! let graphql_err = err.to_graphql_error();
//! assert_eq!(graphql_err.message, "Author 'author_1' not found");
//! ```

use async_graphql::{Error as GraphQLError, ErrorExtensions};

use super::*;

/// Convert domain errors to GraphQL errors with error codes
pub trait ToGraphQLError {
    /// Convert to GraphQL error with structured extensions
    fn to_graphql_error(&self) -> GraphQLError;
}

impl ToGraphQLError for LibraryError {
    fn to_graphql_error(&self) -> GraphQLError {
        let code = self.error_code();
        let message = self.to_string();

        GraphQLError::new(message).extend_with(|_, e| {
            e.set("code", code);

            match self {
                LibraryError::InvalidArgument { field, .. } => {
                    e.set("field", field.as_str());
                }
                LibraryError::DuplicateKey { entity, id } => {
                    e.set("entity", entity.to_string());
                    e.set("id", id.as_str());
                }
                LibraryError::UnknownAuthor(id) => {
                    e.set("authorId", id.as_str());
                }
            }
        })
    }
}
