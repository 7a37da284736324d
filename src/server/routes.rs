//! Application routing
//!
//! This module defines all HTTP routes for the application.

use axum::{
    http::HeaderName,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::api::{accounts, books, deferred, health};
use crate::error::ApiError;
use crate::middleware::logging::{log_request, REQUEST_ID_HEADER, TRACE_ID_HEADER};
use crate::server::state::AppState;

/// Message returned for paths no route matches
pub const ROUTE_NOT_FOUND: &str = "Route not found";

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    // Health check routes stay at the root regardless of the mount prefix
    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/liveness", get(health::liveness));

    let mut router = match state.settings.mount_path() {
        Some(prefix) => {
            tracing::debug!(prefix = %prefix, "Mounting bookstore routes");
            Router::new().nest(prefix, public_routes())
        }
        None => public_routes(),
    }
    .merge(health_routes)
    .fallback(route_not_found);

    if state.settings.cors_enabled {
        router = router.layer(create_cors_layer());
    }

    router
        // Custom request logging with trace IDs
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

/// Public bookstore routes
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(accounts::register))
        .route("/", get(books::list_books))
        .route("/isbn/:isbn", get(books::get_by_isbn))
        .route("/author/:author", get(books::get_by_author))
        .route("/title/:title", get(books::get_by_title))
        .route("/review/:isbn", get(books::get_reviews))
        // Deferred variants of the lookups above
        .route("/async/books", get(deferred::list_books))
        .route("/promise/isbn/:isbn", get(deferred::get_by_isbn))
        .route("/promise/author/:author", get(deferred::get_by_author))
        .route("/promise/title/:title", get(deferred::get_by_title))
}

/// Unmatched paths, including trailing-slash variants of real routes
async fn route_not_found() -> ApiError {
    ApiError::NotFound(ROUTE_NOT_FOUND.to_string())
}

/// Create CORS layer with permissive settings
fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers([
            HeaderName::from_static(TRACE_ID_HEADER),
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
}
