//! Health check handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{ApiResponse, DetailedHealthResponse, HealthResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/health
pub async fn health_check() -> Json<ApiResponse<HealthResponse>> {
    let response = HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    Json(ApiResponse::ok(response))
}

/// GET /api/health/detailed
pub async fn detailed_health(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<DetailedHealthResponse>>, ApiError> {
    let database = match sqlx::query("SELECT 1").execute(&state.db_pool).await {
        Ok(_) => "connected",
        Err(e) => {
            tracing::error!(error = %e, "Database health check failed");
            "disconnected"
        }
    };

    let response = DetailedHealthResponse {
        status: if database == "connected" {
            "healthy".to_string()
        } else {
            "degraded".to_string()
        },
        database: database.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    Ok(Json(ApiResponse::ok(response)))
}
