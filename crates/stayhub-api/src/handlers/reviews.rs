//! Room review handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use stayhub_entity::review::CreateReview;

use crate::dto::request::CreateReviewRequest;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/rooms/{id}/reviews
pub async fn list_reviews(
    State(state): State<AppState>,
    Path(room_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let reviews = state.review_service.list_reviews(room_id).await?;
    let total = state.hotel_service.reviews_count(room_id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "data": { "reviews": reviews, "total": total }
    })))
}

/// POST /api/rooms/{id}/reviews
pub async fn create_review(
    State(state): State<AppState>,
    Path(room_id): Path<Uuid>,
    Json(req): Json<CreateReviewRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let review = state
        .review_service
        .create_review(CreateReview {
            room_id,
            user_id: req.user_id,
            cleanliness_rating: req.cleanliness_rating,
            comfort_rating: req.comfort_rating,
            service_rating: req.service_rating,
            overall_rating: req.overall_rating,
            comment: req.comment,
        })
        .await?;

    Ok(Json(serde_json::json!({ "success": true, "data": review })))
}
