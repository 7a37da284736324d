//! Error handling module
//!
//! Every handler failure is an [`ApiError`], rendered as a status code
//! plus a `{"message": ...}` body.

pub mod types;

pub use types::{ApiError, ApiResult, MessageResponse};
