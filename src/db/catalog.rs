//! Book catalog
//!
//! An ordered, read-only collection of books keyed by ISBN. Iteration
//! follows insertion order, which is also the order of the JSON object
//! produced by serialization.

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::db::models::Book;

/// Errors raised while building or loading a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Duplicate ISBN in catalog: {0}")]
    DuplicateIsbn(String),

    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read-only ISBN → book mapping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    books: Vec<Book>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from books in the given order
    pub fn new(books: Vec<Book>) -> Result<Self, CatalogError> {
        let index = build_index(&books)?;
        Ok(Self { books, index })
    }

    /// The built-in seed catalog
    pub fn seed() -> Self {
        let books = vec![
            Book::new("1", "Things Fall Apart", "Chinua Achebe"),
            Book::new("2", "Fairy tales", "Hans Christian Andersen"),
            Book::new("3", "The Divine Comedy", "Dante Alighieri"),
            Book::new("4", "The Epic Of Gilgamesh", "Unknown"),
            Book::new("5", "The Book Of Job", "Unknown"),
            Book::new("6", "One Thousand and One Nights", "Unknown"),
            Book::new("7", "Njál's Saga", "Unknown"),
            Book::new("8", "Pride and Prejudice", "Jane Austen"),
            Book::new("9", "Le Père Goriot", "Honoré de Balzac"),
            Book::new(
                "10",
                "Molloy, Malone Dies, The Unnamable, the trilogy",
                "Samuel Beckett",
            ),
        ];

        // Seed ISBNs are distinct, so indexing cannot fail
        let index = build_index(&books).unwrap_or_default();

        Self { books, index }
    }

    /// Parse a catalog from a JSON object keyed by ISBN
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a catalog from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::from_json(&contents)?;

        tracing::debug!(
            path = %path.display(),
            books = catalog.len(),
            "Loaded catalog from file"
        );

        Ok(catalog)
    }

    /// Look up a book by exact ISBN
    pub fn get(&self, isbn: &str) -> Option<&Book> {
        self.index.get(isbn).and_then(|&position| self.books.get(position))
    }

    /// Iterate books in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &Book> {
        self.books.iter()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

/// Map each ISBN to its position, rejecting duplicates
fn build_index(books: &[Book]) -> Result<HashMap<String, usize>, CatalogError> {
    let mut index = HashMap::with_capacity(books.len());

    for (position, book) in books.iter().enumerate() {
        if index.insert(book.isbn.clone(), position).is_some() {
            return Err(CatalogError::DuplicateIsbn(book.isbn.clone()));
        }
    }

    Ok(index)
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.books.len()))?;
        for book in &self.books {
            map.serialize_entry(&book.isbn, book)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CatalogVisitor)
    }
}

struct CatalogVisitor;

impl<'de> Visitor<'de> for CatalogVisitor {
    type Value = Catalog;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a JSON object mapping ISBN to book")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Catalog, A::Error> {
        let mut books = Vec::with_capacity(access.size_hint().unwrap_or(0));

        while let Some((isbn, mut book)) = access.next_entry::<String, Book>()? {
            book.isbn = isbn;
            books.push(book);
        }

        Catalog::new(books).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_seed_catalog() {
        let catalog = Catalog::seed();
        assert_eq!(catalog.len(), 10);

        let book = catalog.get("1").unwrap();
        assert_eq!(book.title, "Things Fall Apart");
        assert_eq!(book.author, "Chinua Achebe");
        assert!(book.reviews.is_empty());
    }

    #[test]
    fn test_seed_index_covers_every_book() {
        let catalog = Catalog::seed();
        for book in catalog.iter() {
            assert_eq!(catalog.get(&book.isbn), Some(book));
        }
        assert_eq!(catalog, Catalog::new(catalog.iter().cloned().collect()).unwrap());
    }

    #[test]
    fn test_get_is_exact_match() {
        let catalog = Catalog::seed();
        assert!(catalog.get("99").is_none());
        assert!(catalog.get(" 1").is_none());
        assert!(catalog.get("01").is_none());
    }

    #[test]
    fn test_duplicate_isbn_rejected() {
        let result = Catalog::new(vec![
            Book::new("1", "A", "X"),
            Book::new("1", "B", "Y"),
        ]);
        assert!(matches!(result, Err(CatalogError::DuplicateIsbn(isbn)) if isbn == "1"));
    }

    #[test]
    fn test_serialization_preserves_order() {
        let catalog = Catalog::seed();
        let json = serde_json::to_string(&catalog).unwrap();

        // "10" must come after "9", not after "1"
        let pos_9 = json.find(r#""9":"#).unwrap();
        let pos_10 = json.find(r#""10":"#).unwrap();
        assert!(pos_9 < pos_10);
    }

    #[test]
    fn test_from_json_preserves_order_and_sets_isbn() {
        let catalog = Catalog::from_json(
            r#"{
                "b": {"author": "Second", "title": "Two", "reviews": {"ann": "good"}},
                "a": {"author": "First", "title": "One"}
            }"#,
        )
        .unwrap();

        let isbns: Vec<&str> = catalog.iter().map(|b| b.isbn.as_str()).collect();
        assert_eq!(isbns, vec!["b", "a"]);
        assert_eq!(catalog.get("b").unwrap().reviews.get("ann").unwrap(), "good");
        assert!(catalog.get("a").unwrap().reviews.is_empty());
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        assert!(matches!(
            Catalog::from_json("[]"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_empty_catalog_serializes_to_empty_object() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert_eq!(serde_json::to_string(&catalog).unwrap(), "{}");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"42": {{"author": "Douglas Adams", "title": "Hitchhiker"}}}}"#
        )
        .unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("42").unwrap().author, "Douglas Adams");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Catalog::load(dir.path().join("missing.json"));
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }
}
