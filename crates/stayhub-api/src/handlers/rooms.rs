//! Room CRUD and detail handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use uuid::Uuid;

use stayhub_core::types::pagination::PageResponse;
use stayhub_entity::room::{CreateRoom, UpdateRoom};

use crate::dto::request::{CreateRoomRequest, UpdateRoomRequest};
use crate::dto::response::RoomResponse;
use crate::error::ApiError;
use crate::extractors::PaginationParams;
use crate::handlers::validate_request;
use crate::state::AppState;

/// Query parameters for room listings.
#[derive(Debug, Deserialize)]
pub struct RoomListParams {
    /// Restrict to one hotel.
    pub hotel_id: Option<Uuid>,
}

/// GET /api/rooms?hotel_id=...
pub async fn list_rooms(
    State(state): State<AppState>,
    Query(filter): Query<RoomListParams>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let page = state
        .hotel_service
        .list_rooms(filter.hotel_id, params.into_page_request())
        .await?;

    let page = PageResponse::new(
        page.items.into_iter().map(RoomResponse::from).collect(),
        page.page,
        page.page_size,
        page.total_items,
    );
    Ok(Json(serde_json::json!({ "success": true, "data": page })))
}

/// GET /api/rooms/{id}
pub async fn get_room(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let room = state.hotel_service.get_room(id).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": RoomResponse::from(room) }),
    ))
}

/// GET /api/rooms/{id}/detail
pub async fn room_detail(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let detail = state.hotel_service.room_detail(id).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": detail })))
}

/// POST /api/rooms
pub async fn create_room(
    State(state): State<AppState>,
    Json(req): Json<CreateRoomRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    validate_request(&req)?;

    let room = state
        .hotel_service
        .create_room(CreateRoom {
            hotel_id: req.hotel_id,
            room_number: req.room_number,
            room_type_id: req.room_type_id,
            amenity_ids: req.amenity_ids,
            price_per_night: req.price_per_night,
            discount_percentage: req.discount_percentage,
            capacity: req.capacity,
            floor: req.floor,
            status: req.status,
            description: req.description,
        })
        .await?;

    Ok(Json(
        serde_json::json!({ "success": true, "data": RoomResponse::from(room) }),
    ))
}

/// PATCH /api/rooms/{id}
pub async fn update_room(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateRoomRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let room = state
        .hotel_service
        .update_room(
            id,
            UpdateRoom {
                price_per_night: req.price_per_night,
                discount_percentage: req.discount_percentage,
                capacity: req.capacity,
                status: req.status,
                description: req.description,
                amenity_ids: req.amenity_ids,
            },
        )
        .await?;

    Ok(Json(
        serde_json::json!({ "success": true, "data": RoomResponse::from(room) }),
    ))
}
