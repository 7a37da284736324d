//! Health check endpoints
//!
//! Operational endpoints for monitoring and container orchestration.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::server::state::AppState;

/// Response for the main health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub environment: String,
    pub uptime_seconds: u64,
    pub books: usize,
    pub users: usize,
}

/// Response for liveness probe
#[derive(Debug, Serialize)]
pub struct LivenessResponse {
    pub alive: bool,
}

/// Main health check endpoint
///
/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.settings.app_version.clone(),
        environment: state.settings.environment.to_string(),
        uptime_seconds: state.uptime_seconds(),
        books: state.books.count(),
        users: state.accounts.count(),
    })
}

/// Liveness probe endpoint
///
/// GET /liveness
pub async fn liveness() -> Json<LivenessResponse> {
    Json(LivenessResponse { alive: true })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::db::Catalog;
    use crate::schemas::RegisterRequest;

    #[tokio::test]
    async fn test_health_reports_store_sizes() {
        let state = AppState::with_catalog(Settings::default(), Catalog::seed());
        state
            .accounts
            .register(RegisterRequest::new("reader", "pw"))
            .unwrap();

        let Json(health) = health_check(State(state)).await;
        assert_eq!(health.status, "healthy");
        assert_eq!(health.environment, "development");
        assert_eq!(health.books, 10);
        assert_eq!(health.users, 1);
    }

    #[tokio::test]
    async fn test_liveness() {
        let Json(response) = liveness().await;
        assert!(response.alive);
    }
}
