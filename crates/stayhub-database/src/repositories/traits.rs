//! Repository traits forming the seam between the booking engine and
//! the persistence layer.
//!
//! The engine holds `Arc<dyn ...Repository>` trait objects so its
//! validation pipeline can be exercised against in-memory doubles.

use async_trait::async_trait;
use uuid::Uuid;

use stayhub_core::result::AppResult;
use stayhub_entity::booking::{Booking, NewBooking};
use stayhub_entity::room::Room;

/// Read access to rooms, as required by the booking engine.
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Find a room by ID.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Room>>;
}

/// Booking persistence with an atomic overlap-check-and-insert.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Atomically verify that no active booking overlaps the requested
    /// date range and insert the new booking.
    ///
    /// Returns `RoomUnavailable` when an overlapping pending or
    /// confirmed booking exists. The check and the insert happen under
    /// the same lock, so two concurrent overlapping requests cannot
    /// both succeed.
    async fn reserve(&self, booking: NewBooking) -> AppResult<Booking>;
}
