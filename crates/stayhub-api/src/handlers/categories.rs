//! Blog category handlers.

use axum::Json;
use axum::extract::{Query, State};

use stayhub_entity::blog::CreateCategory;

use crate::dto::request::CreateCategoryRequest;
use crate::error::ApiError;
use crate::extractors::PaginationParams;
use crate::handlers::validate_request;
use crate::state::AppState;

/// GET /api/categories
pub async fn list_categories(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let page = state
        .blog_service
        .list_categories(params.into_page_request())
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": page })))
}

/// POST /api/categories
pub async fn create_category(
    State(state): State<AppState>,
    Json(req): Json<CreateCategoryRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    validate_request(&req)?;

    let category = state
        .blog_service
        .create_category(CreateCategory {
            name: req.name,
            description: req.description,
        })
        .await?;

    Ok(Json(serde_json::json!({ "success": true, "data": category })))
}
