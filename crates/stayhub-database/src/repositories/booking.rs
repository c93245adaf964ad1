//! Booking repository implementation.
//!
//! `reserve` is the only write path for bookings and runs the overlap
//! check and the insert inside one transaction, holding a row lock on
//! the room. That serializes concurrent reservations per room while
//! leaving other rooms uncontended.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::warn;
use uuid::Uuid;

use stayhub_core::error::{AppError, ErrorKind};
use stayhub_core::result::AppResult;
use stayhub_core::types::pagination::{PageRequest, PageResponse};
use stayhub_entity::booking::{Booking, BookingStatus, NewBooking};

use crate::connection::is_transient;
use crate::repositories::traits::BookingRepository;

/// Outcome of a single reservation attempt.
enum ReserveAttempt {
    Created(Booking),
    Overlap,
}

/// PostgreSQL-backed booking repository.
#[derive(Debug, Clone)]
pub struct PgBookingRepository {
    pool: PgPool,
    retry_backoff: Duration,
}

impl PgBookingRepository {
    /// Create a new booking repository.
    pub fn new(pool: PgPool, retry_backoff_ms: u64) -> Self {
        Self {
            pool,
            retry_backoff: Duration::from_millis(retry_backoff_ms),
        }
    }

    /// Find a booking by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find booking", e))
    }

    /// List bookings for a room, newest first, with pagination.
    pub async fn find_by_room(
        &self,
        room_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Booking>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bookings WHERE room_id = $1")
            .bind(room_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count bookings", e)
            })?;

        let bookings = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE room_id = $1 ORDER BY created_at DESC \
             LIMIT $2 OFFSET $3",
        )
        .bind(room_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list bookings", e))?;

        Ok(PageResponse::new(
            bookings,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Update a booking's status, enforcing the lifecycle transitions.
    pub async fn update_status(&self, id: Uuid, next: BookingStatus) -> AppResult<Booking> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Booking {id} not found")))?;

        if !current.status.can_transition_to(next) {
            return Err(AppError::conflict(format!(
                "Booking cannot move from '{}' to '{}'",
                current.status, next
            )));
        }

        sqlx::query_as::<_, Booking>("UPDATE bookings SET status = $2 WHERE id = $1 RETURNING *")
            .bind(id)
            .bind(next)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update booking status", e)
            })
    }

    /// One reservation attempt: lock the room row, test for overlap, insert.
    async fn try_reserve(&self, booking: &NewBooking) -> Result<ReserveAttempt, sqlx::Error> {
        let mut tx: Transaction<'_, Postgres> = self.pool.begin().await?;

        // Row lock on the room serializes concurrent reservations for it.
        sqlx::query("SELECT id FROM rooms WHERE id = $1 FOR UPDATE")
            .bind(booking.room_id)
            .fetch_optional(&mut *tx)
            .await?;

        // Half-open overlap: an existing [a, b) collides with [c, d)
        // exactly when a < d AND b > c. Checkout day stays free.
        let overlaps: bool = sqlx::query_scalar(
            "SELECT EXISTS (\
                SELECT 1 FROM bookings \
                WHERE room_id = $1 \
                  AND status IN ('pending', 'confirmed') \
                  AND check_in < $3 \
                  AND check_out > $2\
             )",
        )
        .bind(booking.room_id)
        .bind(booking.check_in)
        .bind(booking.check_out)
        .fetch_one(&mut *tx)
        .await?;

        if overlaps {
            tx.rollback().await?;
            return Ok(ReserveAttempt::Overlap);
        }

        let created = sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings \
             (room_id, user_id, check_in, check_out, guests_count, total_price, status, special_requests) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
        )
        .bind(booking.room_id)
        .bind(booking.user_id)
        .bind(booking.check_in)
        .bind(booking.check_out)
        .bind(booking.guests_count)
        .bind(booking.total_price)
        .bind(booking.status)
        .bind(&booking.special_requests)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(ReserveAttempt::Created(created))
    }
}

#[async_trait]
impl BookingRepository for PgBookingRepository {
    async fn reserve(&self, booking: NewBooking) -> AppResult<Booking> {
        match self.try_reserve(&booking).await {
            Ok(ReserveAttempt::Created(created)) => Ok(created),
            Ok(ReserveAttempt::Overlap) => Err(room_unavailable(&booking)),
            Err(e) if is_transient(&e) => {
                warn!(
                    room_id = %booking.room_id,
                    error = %e,
                    "Transient database failure during reserve, retrying once"
                );
                tokio::time::sleep(self.retry_backoff).await;
                match self.try_reserve(&booking).await {
                    Ok(ReserveAttempt::Created(created)) => Ok(created),
                    Ok(ReserveAttempt::Overlap) => Err(room_unavailable(&booking)),
                    Err(e) => Err(AppError::with_source(
                        ErrorKind::StorageUnavailable,
                        "Booking storage unavailable after retry",
                        e,
                    )),
                }
            }
            Err(e) => Err(AppError::with_source(
                ErrorKind::Database,
                "Failed to reserve booking",
                e,
            )),
        }
    }
}

fn room_unavailable(booking: &NewBooking) -> AppError {
    AppError::room_unavailable(format!(
        "Room {} is already booked between {} and {}",
        booking.room_id, booking.check_in, booking.check_out
    ))
}
