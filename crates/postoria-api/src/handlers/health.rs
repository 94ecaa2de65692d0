//! Health check handlers
//!
//! Endpoints for liveness and readiness probes.

use axum::{extract::State, http::StatusCode, Json};
use postoria_service::dto::{HealthResponse, ReadinessResponse};

use crate::state::AppState;

/// Basic health check (liveness probe)
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Readiness check with dependency health
///
/// GET /health/ready
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let db_healthy = state.pool().acquire().await.is_ok();

    let (status, response) = if db_healthy {
        (
            StatusCode::OK,
            ReadinessResponse { status: "ready", database: "up" },
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            ReadinessResponse { status: "not ready", database: "down" },
        )
    };

    (status, Json(response))
}
