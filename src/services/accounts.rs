//! User registration

use std::sync::Arc;
use validator::Validate;

use crate::db::{User, UserStore, UserStoreError};
use crate::error::{ApiError, ApiResult, MessageResponse};
use crate::schemas::RegisterRequest;

pub const CREDENTIALS_REQUIRED: &str = "Username and password required";
pub const USER_EXISTS: &str = "User already exists";
pub const USER_REGISTERED: &str = "User successfully registered";

/// Registration service backed by the shared user store
#[derive(Debug, Clone)]
pub struct AccountService {
    users: Arc<UserStore>,
}

impl AccountService {
    pub fn new(users: Arc<UserStore>) -> Self {
        Self { users }
    }

    /// Duplicate check against the user store
    pub fn is_valid(&self, username: &str) -> bool {
        self.users.is_valid(username)
    }

    /// Number of registered users
    pub fn count(&self) -> usize {
        self.users.len()
    }

    /// Register a new user
    ///
    /// # Errors
    /// - `Validation`: username or password missing or empty
    /// - `Conflict`: username already registered
    pub fn register(&self, request: RegisterRequest) -> ApiResult<MessageResponse> {
        if request.validate().is_err() {
            tracing::warn!("Registration rejected: missing credentials");
            return Err(ApiError::Validation(CREDENTIALS_REQUIRED.to_string()));
        }

        // Fast path; the insert below re-checks under the write lock
        if self.is_valid(&request.username) {
            tracing::warn!(username = %request.username, "Registration rejected: user exists");
            return Err(ApiError::Conflict(USER_EXISTS.to_string()));
        }

        let username = request.username.clone();
        self.users
            .insert(User::new(request.username, request.password))
            .map_err(|e| match e {
                UserStoreError::AlreadyExists(name) => {
                    tracing::warn!(username = %name, "Registration lost race for username");
                    ApiError::Conflict(USER_EXISTS.to_string())
                }
            })?;

        tracing::info!(username = %username, "User registered");

        Ok(MessageResponse::new(USER_REGISTERED))
    }
}
