//! Hotel CRUD handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use stayhub_entity::hotel::CreateHotel;

use crate::dto::request::CreateHotelRequest;
use crate::dto::response::HotelResponse;
use crate::error::ApiError;
use crate::extractors::PaginationParams;
use crate::handlers::validate_request;
use crate::state::AppState;

/// GET /api/hotels
pub async fn list_hotels(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let page = state
        .hotel_service
        .list_hotels(params.into_page_request())
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": page })))
}

/// GET /api/hotels/{id}
pub async fn get_hotel(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let hotel = state.hotel_service.get_hotel(id).await?;
    let rooms_count = state.hotel_service.rooms_count(id).await?;
    let response = HotelResponse { hotel, rooms_count };
    Ok(Json(serde_json::json!({ "success": true, "data": response })))
}

/// POST /api/hotels
pub async fn create_hotel(
    State(state): State<AppState>,
    Json(req): Json<CreateHotelRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    validate_request(&req)?;

    let hotel = state
        .hotel_service
        .create_hotel(CreateHotel {
            name: req.name,
            description: req.description,
            address: req.address,
            city: req.city,
            country: req.country,
            star_rating: req.star_rating,
            phone: req.phone,
            email: req.email,
        })
        .await?;

    Ok(Json(serde_json::json!({ "success": true, "data": hotel })))
}
