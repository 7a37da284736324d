//! Catalog lookups
//!
//! Every lookup route, synchronous or deferred, goes through
//! [`BookService`]. Misses surface as [`ApiError::NotFound`].

use std::sync::Arc;

use crate::db::{Book, Catalog, Reviews};
use crate::error::{ApiError, ApiResult};

/// Read-only query service over the catalog
#[derive(Debug, Clone)]
pub struct BookService {
    catalog: Arc<Catalog>,
}

impl BookService {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// The full catalog; never fails, even when empty
    pub fn list(&self) -> &Catalog {
        &self.catalog
    }

    /// Number of books in the catalog
    pub fn count(&self) -> usize {
        self.catalog.len()
    }

    /// Exact ISBN lookup
    pub fn get_by_isbn(&self, isbn: &str) -> ApiResult<Book> {
        self.catalog
            .get(isbn)
            .cloned()
            .ok_or_else(ApiError::book_not_found)
    }

    /// All books whose author equals `author` exactly, in catalog order
    pub fn get_by_author(&self, author: &str) -> ApiResult<Vec<Book>> {
        self.filter(|book| book.author == author)
    }

    /// All books whose title equals `title` exactly, in catalog order
    pub fn get_by_title(&self, title: &str) -> ApiResult<Vec<Book>> {
        self.filter(|book| book.title == title)
    }

    /// Reviews of an existing book; an empty set is still a hit
    pub fn get_reviews(&self, isbn: &str) -> ApiResult<Reviews> {
        self.get_by_isbn(isbn).map(|book| book.reviews)
    }

    fn filter<F>(&self, predicate: F) -> ApiResult<Vec<Book>>
    where
        F: Fn(&Book) -> bool,
    {
        let matches: Vec<Book> = self
            .catalog
            .iter()
            .filter(|book| predicate(book))
            .cloned()
            .collect();

        if matches.is_empty() {
            return Err(ApiError::book_not_found());
        }

        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> BookService {
        let catalog = Catalog::new(vec![
            Book::new("1", "Things Fall Apart", "Chinua Achebe"),
            Book::new("2", "Arrow of God", "Chinua Achebe"),
            Book::new("3", "Emma", "Jane Austen").with_review("ann", "Lovely"),
            Book::new("4", "Emma", "Someone Else"),
        ])
        .unwrap();

        BookService::new(Arc::new(catalog))
    }

    #[test]
    fn test_get_by_isbn_hit_and_miss() {
        let service = service();

        let book = service.get_by_isbn("1").unwrap();
        assert_eq!(book.title, "Things Fall Apart");

        let err = service.get_by_isbn("99").unwrap_err();
        assert!(matches!(err, ApiError::NotFound(ref msg) if msg == "Book not found"));
    }

    #[test]
    fn test_get_by_author_preserves_order() {
        let books = service().get_by_author("Chinua Achebe").unwrap();
        let isbns: Vec<&str> = books.iter().map(|b| b.isbn.as_str()).collect();
        assert_eq!(isbns, vec!["1", "2"]);
    }

    #[test]
    fn test_get_by_author_exact_match_only() {
        let service = service();
        assert!(service.get_by_author("Chinua").is_err());
        assert!(service.get_by_author("chinua achebe").is_err());
    }

    #[test]
    fn test_get_by_title_returns_all_matches() {
        let books = service().get_by_title("Emma").unwrap();
        assert_eq!(books.len(), 2);
        assert_eq!(books[0].author, "Jane Austen");
        assert_eq!(books[1].author, "Someone Else");
    }

    #[test]
    fn test_get_reviews_distinguishes_empty_from_missing() {
        let service = service();

        assert!(service.get_reviews("1").unwrap().is_empty());
        assert_eq!(service.get_reviews("3").unwrap().get("ann").unwrap(), "Lovely");
        assert!(matches!(service.get_reviews("99"), Err(ApiError::NotFound(_))));
    }

    #[test]
    fn test_list_empty_catalog() {
        let service = BookService::new(Arc::new(Catalog::default()));
        assert!(service.list().is_empty());
        assert_eq!(service.count(), 0);
    }
}
