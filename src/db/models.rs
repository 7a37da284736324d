//! Data models
//!
//! Typed records held by the catalog and user stores.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Reviews keyed by reviewer
pub type Reviews = BTreeMap<String, String>;

// ============================================================================
// Book
// ============================================================================

/// A catalog entry
///
/// The ISBN is the catalog key, so it is not part of the JSON body:
/// a book serializes as `{"author", "title", "reviews"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    #[serde(skip)]
    pub isbn: String,
    pub author: String,
    pub title: String,
    #[serde(default)]
    pub reviews: Reviews,
}

impl Book {
    /// Create a book with no reviews
    pub fn new(isbn: impl Into<String>, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            isbn: isbn.into(),
            author: author.into(),
            title: title.into(),
            reviews: Reviews::new(),
        }
    }

    /// Attach a review (builder style)
    pub fn with_review(mut self, reviewer: impl Into<String>, review: impl Into<String>) -> Self {
        self.reviews.insert(reviewer.into(), review.into());
        self
    }
}

// ============================================================================
// User
// ============================================================================

/// A registered user
///
/// Passwords are kept as submitted; hashing is not part of this service.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub password: String,
}

impl User {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}
