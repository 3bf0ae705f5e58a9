//! Domain-specific error types for bookshelf
//!
//! # Error Categories
//!
//! - **LibraryError**: store insertions and service argument validation
//!
//! # GraphQL Integration
//!
//! When the `graphql` feature is enabled, error types can be converted to GraphQL errors
//! with structured error codes and extensions using the `ToGraphQLError` trait.
//!
//! # Examples
//!
//! ```rust
//! use bookshelf::errors::{LibraryError, LibraryResult};
//!
//! fn require_text(text: Option<&str>) -> LibraryResult<&str> {
//!     text.ok_or_else(|| LibraryError::invalid_argument("text", "is required"))
//! }
//!
//! assert!(require_text(None).is_err());
//! ```

#[cfg(feature = "graphql")]
pub mod common;
pub mod library;

pub use library::{EntityKind, LibraryError};

#[cfg(feature = "graphql")]
pub use common::ToGraphQLError;

/// Result type alias for store and service operations
pub type LibraryResult<T> = Result<T, LibraryError>;
