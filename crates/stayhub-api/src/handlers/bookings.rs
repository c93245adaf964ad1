//! Reservation handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use stayhub_core::types::pagination::PageResponse;
use stayhub_service::booking::BookingRequest;

use crate::dto::request::{CreateBookingRequest, UpdateBookingStatusRequest};
use crate::dto::response::BookingResponse;
use crate::error::ApiError;
use crate::extractors::PaginationParams;
use crate::state::AppState;

/// POST /api/rooms/{id}/bookings
pub async fn create_booking(
    State(state): State<AppState>,
    Path(room_id): Path<Uuid>,
    Json(req): Json<CreateBookingRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let booking = state
        .booking_engine
        .reserve(
            room_id,
            req.user_id,
            BookingRequest {
                check_in: req.check_in,
                check_out: req.check_out,
                guests_count: req.guests_count,
                special_requests: req.special_requests,
            },
        )
        .await?;

    let user = state.user_service.get_user(booking.user_id).await?;
    let room = state.hotel_service.get_room(room_id).await?;
    let hotel = state.hotel_service.get_hotel(room.hotel_id).await?;

    let response = BookingResponse::from_parts(booking, &user, &room, &hotel);
    Ok(Json(serde_json::json!({ "success": true, "data": response })))
}

/// GET /api/rooms/{id}/bookings
pub async fn list_bookings(
    State(state): State<AppState>,
    Path(room_id): Path<Uuid>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let room = state.hotel_service.get_room(room_id).await?;
    let hotel = state.hotel_service.get_hotel(room.hotel_id).await?;

    let page = state
        .booking_repo
        .find_by_room(room_id, &params.into_page_request())
        .await?;

    let mut items = Vec::with_capacity(page.items.len());
    for booking in page.items {
        let user = state.user_service.get_user(booking.user_id).await?;
        items.push(BookingResponse::from_parts(booking, &user, &room, &hotel));
    }

    let page = PageResponse::new(items, page.page, page.page_size, page.total_items);
    Ok(Json(serde_json::json!({ "success": true, "data": page })))
}

/// PATCH /api/bookings/{id}
///
/// Advances a booking through its lifecycle. Illegal transitions
/// (e.g. reviving a cancelled booking) are rejected with a conflict.
pub async fn update_booking_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateBookingStatusRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let booking = state.booking_repo.update_status(id, req.status).await?;

    let user = state.user_service.get_user(booking.user_id).await?;
    let room = state.hotel_service.get_room(booking.room_id).await?;
    let hotel = state.hotel_service.get_hotel(room.hotel_id).await?;

    let response = BookingResponse::from_parts(booking, &user, &room, &hotel);
    Ok(Json(serde_json::json!({ "success": true, "data": response })))
}
