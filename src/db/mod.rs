//! Data module
//!
//! Contains the in-memory catalog and user stores owned by the service.

pub mod catalog;
pub mod models;
pub mod users;

pub use catalog::{Catalog, CatalogError};
pub use models::{Book, Reviews, User};
pub use users::{UserStore, UserStoreError};
