//! Registration endpoint
//!
//! POST /register

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::error::{ApiError, ApiResult, MessageResponse};
use crate::schemas::RegisterRequest;
use crate::server::state::AppState;
use crate::services::accounts::CREDENTIALS_REQUIRED;

/// POST /register - Register a new user
///
/// A body that cannot be read as `{username, password}` is reported the
/// same way as a missing field.
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Unreadable registration body");
        ApiError::Validation(CREDENTIALS_REQUIRED.to_string())
    })?;

    state.accounts.register(request).map(Json)
}
