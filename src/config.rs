use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::store::{Author, Book};

const GARCIA_MARQUEZ_ID: &str = "d9e63480-4729-4b76-be00-bdc4b5c913a1";
const CIEN_ANOS_ID: &str = "b9d110ec-b3c1-4ecc-9fc7-fd1c22b4521a";
const EL_AMOR_ID: &str = "73488bd3-44fa-412b-94a1-2be9d0441c45";

/// Records loaded into the store at startup
///
/// ```yaml
/// authors:
///   - id: author_1
///     name: Gabriel García Márquez
///     books: [book_1]
/// books:
///   - id: book_1
///     title: Cien años De soledad
///     authorId: author_1
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub authors: Vec<Author>,
    #[serde(default)]
    pub books: Vec<Book>,
}

impl Default for SeedData {
    /// The built-in library served when no seed file is given
    fn default() -> Self {
        Self {
            authors: vec![Author::new(
                GARCIA_MARQUEZ_ID,
                "Gabriel García Márquez",
                vec![CIEN_ANOS_ID.to_string(), EL_AMOR_ID.to_string()],
            )],
            books: vec![
                Book::new(CIEN_ANOS_ID, "Cien años De soledad", GARCIA_MARQUEZ_ID),
                Book::new(
                    EL_AMOR_ID,
                    "El amor en los tiempos del cólera",
                    GARCIA_MARQUEZ_ID,
                ),
            ],
        }
    }
}

impl SeedData {
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("Failed to parse seed data")
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read seed file {}", path.display()))?;
        Self::from_yaml_str(&content)
    }

    /// Load the seed file if one is given, otherwise the built-in library
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                tracing::info!("Loading seed data from {}", path.display());
                Self::from_yaml_file(path)
            }
            None => Ok(Self::default()),
        }
    }
}
