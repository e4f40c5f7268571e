use axum::{Json, extract::State};
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState, HealthDto};

/// GET /health/live
pub async fn live(State(state): State<Arc<AppState>>) -> Json<ApiResponse<HealthDto>> {
    Json(ApiResponse::success(HealthDto {
        status: "alive",
        uptime_seconds: state.start_time.elapsed().as_secs(),
    }))
}

/// GET /health/ready
/// Ready once the database answers a trivial query
pub async fn ready(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<HealthDto>>, ApiError> {
    state
        .store()
        .ping()
        .await
        .map_err(|e| ApiError::ServiceUnavailable(format!("Database unreachable: {e}")))?;

    Ok(Json(ApiResponse::success(HealthDto {
        status: "ready",
        uptime_seconds: state.start_time.elapsed().as_secs(),
    })))
}
