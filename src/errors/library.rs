//! Library-related error types
//!
//! Errors raised by the store and the catalog/author services.
//!
//! # Examples
//!
//! ```rust
//! use bookshelf::errors::LibraryError;
//!
//! let err = LibraryError::invalid_argument("name", "must not be empty");
//! assert_eq!(err.error_code(), "VALIDATION_FAILED");
//! ```

use std::fmt;

use thiserror::Error;

/// Kind of record a store key belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Book,
    Author,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Book => write!(f, "Book"),
            EntityKind::Author => write!(f, "Author"),
        }
    }
}

/// Library-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LibraryError {
    /// A required argument was missing or empty
    #[error("Invalid argument '{field}': {message}")]
    InvalidArgument {
        /// Name of the offending argument
        field: String,
        /// What was wrong with it
        message: String,
    },

    /// An identifier is already taken
    #[error("{entity} '{id}' already exists")]
    DuplicateKey {
        /// Kind of record the identifier belongs to
        entity: EntityKind,
        /// The colliding identifier
        id: String,
    },

    /// A book references an author that is not stored
    #[error("Author '{0}' not found")]
    UnknownAuthor(String),
}

impl LibraryError {
    pub fn invalid_argument(field: impl Into<String>, message: impl Into<String>) -> Self {
        LibraryError::InvalidArgument {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn duplicate(entity: EntityKind, id: impl Into<String>) -> Self {
        LibraryError::DuplicateKey {
            entity,
            id: id.into(),
        }
    }

    /// Check if this is a client error (400-series)
    pub fn is_client_error(&self) -> bool {
        matches!(self, LibraryError::InvalidArgument { .. })
    }

    /// Get error code for GraphQL/API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            LibraryError::InvalidArgument { .. } => "VALIDATION_FAILED",
            LibraryError::DuplicateKey { .. } => "CONFLICT",
            LibraryError::UnknownAuthor(_) => "NOT_FOUND",
        }
    }
}
