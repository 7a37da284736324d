//! API endpoint handlers module
//!
//! Contains all HTTP endpoint handler implementations.

pub mod accounts;
pub mod books;
pub mod deferred;
pub mod health;
