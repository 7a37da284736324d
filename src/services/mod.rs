//! Business logic services
//!
//! Lookup and registration logic shared by every HTTP entry point.

pub mod accounts;
pub mod books;

pub use accounts::AccountService;
pub use books::BookService;
