//! Registration and user listing handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use stayhub_service::user::RegisterUser;

use crate::dto::request::RegisterRequest;
use crate::error::ApiError;
use crate::extractors::PaginationParams;
use crate::handlers::validate_request;
use crate::state::AppState;

/// POST /api/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    validate_request(&req)?;

    let user = state
        .user_service
        .register(RegisterUser {
            username: req.username,
            email: req.email,
            password: req.password,
            password_confirm: req.password_confirm,
            first_name: req.first_name,
            last_name: req.last_name,
            phone_number: req.phone_number,
            bio: req.bio,
        })
        .await?;

    Ok(Json(serde_json::json!({ "success": true, "data": user })))
}

/// GET /api/users
pub async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let page = state
        .user_service
        .list_users(params.into_page_request())
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": page })))
}

/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": user })))
}
