use crate::errors::{LibraryError, LibraryResult};

/// Service for argument validation
pub struct ValidationService;

impl ValidationService {
    /// Search text must be present and non-empty
    pub fn validate_search_text(text: Option<&str>) -> LibraryResult<&str> {
        match text {
            None => Err(LibraryError::invalid_argument("text", "is required")),
            Some("") => Err(LibraryError::invalid_argument("text", "must not be empty")),
            Some(text) => Ok(text),
        }
    }

    /// Author name must be present and not blank; it is kept as given
    pub fn validate_author_name(name: Option<&str>) -> LibraryResult<String> {
        let name = name.ok_or_else(|| LibraryError::invalid_argument("name", "is required"))?;

        if name.trim().is_empty() {
            return Err(LibraryError::invalid_argument(
                "name",
                "Author name cannot be empty",
            ));
        }

        Ok(name.to_string())
    }

    /// Book title must not be blank; it is kept as given
    pub fn validate_book_title(title: &str) -> LibraryResult<String> {
        if title.trim().is_empty() {
            return Err(LibraryError::invalid_argument(
                "books",
                "Book title cannot be empty",
            ));
        }

        Ok(title.to_string())
    }
}
