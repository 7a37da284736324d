//! Catalog endpoints
//!
//! GET /, /isbn/:isbn, /author/:author, /title/:title, /review/:isbn

use axum::{
    extract::{Path, State},
    Json,
};

use crate::db::{Book, Catalog, Reviews};
use crate::error::ApiResult;
use crate::server::state::AppState;

/// GET / - The whole catalog keyed by ISBN
pub async fn list_books(State(state): State<AppState>) -> Json<Catalog> {
    tracing::debug!(book_count = state.books.count(), "Listing catalog");
    Json(state.books.list().clone())
}

/// GET /isbn/:isbn
pub async fn get_by_isbn(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> ApiResult<Json<Book>> {
    tracing::debug!(isbn = %isbn, "Looking up book by ISBN");
    state.books.get_by_isbn(&isbn).map(Json)
}

/// GET /author/:author
pub async fn get_by_author(
    State(state): State<AppState>,
    Path(author): Path<String>,
) -> ApiResult<Json<Vec<Book>>> {
    tracing::debug!(author = %author, "Looking up books by author");
    state.books.get_by_author(&author).map(Json)
}

/// GET /title/:title
pub async fn get_by_title(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> ApiResult<Json<Vec<Book>>> {
    tracing::debug!(title = %title, "Looking up books by title");
    state.books.get_by_title(&title).map(Json)
}

/// GET /review/:isbn
pub async fn get_reviews(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> ApiResult<Json<Reviews>> {
    tracing::debug!(isbn = %isbn, "Fetching reviews");
    state.books.get_reviews(&isbn).map(Json)
}
