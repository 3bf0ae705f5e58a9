use serde::{Deserialize, Serialize};

/// A book record as held by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author_id: String,
}

/// An author record as held by the store
///
/// `books` is the list of book ids written when the author was created. It is
/// a snapshot: books inserted later for the same author do not appear here.
/// Use `Book::author_id` for the authoritative relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub books: Vec<String>,
}

impl Book {
    pub fn new(id: impl Into<String>, title: impl Into<String>, author_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author_id: author_id.into(),
        }
    }
}

impl Author {
    pub fn new(id: impl Into<String>, name: impl Into<String>, books: Vec<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            books,
        }
    }
}
