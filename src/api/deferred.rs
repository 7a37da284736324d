//! Deferred lookup endpoints
//!
//! GET /async/books, /promise/isbn/:isbn, /promise/author/:author,
//! /promise/title/:title
//!
//! These reuse the [`BookService`](crate::services::BookService) lookups
//! and only differ in how the result is produced: each lookup runs inside a
//! lazily evaluated future that resolves on first poll.

use axum::{
    extract::{Path, State},
    Json,
};
use futures::future::{self, FutureExt};
use std::panic::AssertUnwindSafe;

use crate::db::{Book, Catalog};
use crate::error::{ApiError, ApiResult};
use crate::server::state::AppState;

pub const BOOKS_UNAVAILABLE: &str = "Error retrieving books";
pub const AUTHOR_NOT_FOUND: &str = "Author not found";
pub const TITLE_NOT_FOUND: &str = "Title not found";

/// GET /async/books - The whole catalog
///
/// A panic while producing the snapshot becomes a 500.
pub async fn list_books(State(state): State<AppState>) -> ApiResult<Json<Catalog>> {
    let books = state.books.clone();

    AssertUnwindSafe(future::lazy(move |_| books.list().clone()))
        .catch_unwind()
        .await
        .map(Json)
        .map_err(|_| ApiError::Internal(BOOKS_UNAVAILABLE.to_string()))
}

/// GET /promise/isbn/:isbn
pub async fn get_by_isbn(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> ApiResult<Json<Book>> {
    let books = state.books.clone();

    future::lazy(move |_| books.get_by_isbn(&isbn))
        .await
        .map(Json)
}

/// GET /promise/author/:author
pub async fn get_by_author(
    State(state): State<AppState>,
    Path(author): Path<String>,
) -> ApiResult<Json<Vec<Book>>> {
    let books = state.books.clone();

    future::lazy(move |_| books.get_by_author(&author))
        .await
        .map(Json)
        .map_err(reject_with(AUTHOR_NOT_FOUND))
}

/// GET /promise/title/:title
pub async fn get_by_title(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> ApiResult<Json<Vec<Book>>> {
    let books = state.books.clone();

    future::lazy(move |_| books.get_by_title(&title))
        .await
        .map(Json)
        .map_err(reject_with(TITLE_NOT_FOUND))
}

/// Replace the message of a lookup miss, leaving other errors untouched
fn reject_with(message: &'static str) -> impl FnOnce(ApiError) -> ApiError {
    move |error| match error {
        ApiError::NotFound(_) => ApiError::NotFound(message.to_string()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    fn state() -> AppState {
        AppState::with_catalog(Settings::default(), Catalog::seed())
    }

    #[tokio::test]
    async fn test_async_list_books_matches_sync_listing() {
        let state = state();
        let Json(catalog) = list_books(State(state.clone())).await.unwrap();
        assert_eq!(&catalog, state.books.list());
    }

    #[tokio::test]
    async fn test_promise_isbn_hit_and_miss() {
        let Json(book) = get_by_isbn(State(state()), Path("1".to_string())).await.unwrap();
        assert_eq!(book.title, "Things Fall Apart");

        let err = get_by_isbn(State(state()), Path("99".to_string())).await.unwrap_err();
        assert_eq!(err.message(), "Book not found");
    }

    #[tokio::test]
    async fn test_promise_author_miss_message() {
        let Json(books) = get_by_author(State(state()), Path("Jane Austen".to_string()))
            .await
            .unwrap();
        assert_eq!(books.len(), 1);

        let err = get_by_author(State(state()), Path("Nobody".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(ref msg) if msg == AUTHOR_NOT_FOUND));
    }

    #[tokio::test]
    async fn test_promise_title_miss_message() {
        let err = get_by_title(State(state()), Path("Pride".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(ref msg) if msg == TITLE_NOT_FOUND));
    }

    #[test]
    fn test_reject_with_keeps_other_errors() {
        let error = reject_with(TITLE_NOT_FOUND)(ApiError::Internal("boom".to_string()));
        assert!(matches!(error, ApiError::Internal(ref msg) if msg == "boom"));
    }
}
