//! Site feedback handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use stayhub_entity::feedback::CreateFeedback;

use crate::dto::request::{CreateFeedbackRequest, UpdateFeedbackRequest};
use crate::error::ApiError;
use crate::handlers::validate_request;
use crate::state::AppState;

/// POST /api/feedback
pub async fn submit_feedback(
    State(state): State<AppState>,
    Json(req): Json<CreateFeedbackRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    validate_request(&req)?;

    let feedback = state
        .feedback_service
        .submit(CreateFeedback {
            email: req.email,
            message: req.message,
        })
        .await?;

    Ok(Json(serde_json::json!({ "success": true, "data": feedback })))
}

/// GET /api/feedback/{id}
pub async fn get_feedback(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let feedback = state.feedback_service.get(id).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": feedback })))
}

/// PUT /api/feedback/{id}
pub async fn update_feedback(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateFeedbackRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let feedback = state
        .feedback_service
        .update_message(id, &req.message)
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": feedback })))
}
