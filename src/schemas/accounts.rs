//! Account request types

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /register`
///
/// Missing fields deserialize as empty strings so that absence and
/// emptiness fail the same validation.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub username: String,

    #[serde(default)]
    #[validate(length(min = 1))]
    pub password: String,
}

impl RegisterRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_password_fails_validation() {
        let request: RegisterRequest = serde_json::from_str(r#"{"username": "a"}"#).unwrap();
        assert_eq!(request.password, "");
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_empty_username_fails_validation() {
        assert!(RegisterRequest::new("", "b").validate().is_err());
    }

    #[test]
    fn test_complete_request_passes_validation() {
        assert!(RegisterRequest::new("a", "b").validate().is_ok());
    }
}
