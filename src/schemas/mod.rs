//! Request and response schemas
//!
//! Wire types for the public bookstore API.

pub mod accounts;

pub use accounts::RegisterRequest;
