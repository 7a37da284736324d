//! User store
//!
//! Append-only collection of registered users. The duplicate check and the
//! append happen under one write lock, so concurrent registrations of the
//! same username cannot both succeed.

use std::sync::{PoisonError, RwLock};
use thiserror::Error;

use crate::db::models::User;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum UserStoreError {
    #[error("User already exists: {0}")]
    AlreadyExists(String),
}

/// Registered users in registration order
#[derive(Debug, Default)]
pub struct UserStore {
    users: RwLock<Vec<User>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when a user with this username is already registered
    pub fn is_valid(&self, username: &str) -> bool {
        let users = self.users.read().unwrap_or_else(PoisonError::into_inner);
        users.iter().any(|user| user.username == username)
    }

    /// Append a user unless the username is taken
    pub fn insert(&self, user: User) -> Result<(), UserStoreError> {
        let mut users = self.users.write().unwrap_or_else(PoisonError::into_inner);

        if users.iter().any(|existing| existing.username == user.username) {
            return Err(UserStoreError::AlreadyExists(user.username));
        }

        users.push(user);
        Ok(())
    }

    /// Number of registered users
    pub fn len(&self) -> usize {
        self.users.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
