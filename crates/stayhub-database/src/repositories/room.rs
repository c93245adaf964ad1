//! Room repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use stayhub_core::error::{AppError, ErrorKind};
use stayhub_core::result::AppResult;
use stayhub_core::types::pagination::{PageRequest, PageResponse};
use stayhub_entity::room::{Amenity, CreateRoom, Room, RoomType, UpdateRoom};

use crate::repositories::traits::RoomRepository;

/// PostgreSQL-backed room repository.
#[derive(Debug, Clone)]
pub struct PgRoomRepository {
    pool: PgPool,
}

impl PgRoomRepository {
    /// Create a new room repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List rooms with pagination, optionally filtered by hotel.
    pub async fn list(
        &self,
        hotel_id: Option<Uuid>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Room>> {
        let (total, rooms) = if let Some(hotel_id) = hotel_id {
            let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM rooms WHERE hotel_id = $1")
                .bind(hotel_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count rooms", e)
                })?;
            let rooms = sqlx::query_as::<_, Room>(
                "SELECT * FROM rooms WHERE hotel_id = $1 ORDER BY room_number ASC \
                 LIMIT $2 OFFSET $3",
            )
            .bind(hotel_id)
            .bind(page.limit() as i64)
            .bind(page.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list rooms", e))?;
            (total, rooms)
        } else {
            let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM rooms")
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count rooms", e)
                })?;
            let rooms = sqlx::query_as::<_, Room>(
                "SELECT * FROM rooms ORDER BY room_number ASC LIMIT $1 OFFSET $2",
            )
            .bind(page.limit() as i64)
            .bind(page.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list rooms", e))?;
            (total, rooms)
        };

        Ok(PageResponse::new(
            rooms,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Create a new room together with its amenity links.
    pub async fn create(&self, data: &CreateRoom) -> AppResult<Room> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to start transaction", e)
        })?;

        let room = sqlx::query_as::<_, Room>(
            "INSERT INTO rooms \
             (hotel_id, room_number, room_type_id, price_per_night, discount_percentage, \
              capacity, floor, status, description) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING *",
        )
        .bind(data.hotel_id)
        .bind(&data.room_number)
        .bind(data.room_type_id)
        .bind(data.price_per_night)
        .bind(data.discount_percentage)
        .bind(data.capacity)
        .bind(data.floor)
        .bind(data.status)
        .bind(&data.description)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("rooms_hotel_id_room_number_key") =>
            {
                AppError::conflict(format!(
                    "Room '{}' already exists in this hotel",
                    data.room_number
                ))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create room", e),
        })?;

        for amenity_id in &data.amenity_ids {
            sqlx::query("INSERT INTO room_amenities (room_id, amenity_id) VALUES ($1, $2)")
                .bind(room.id)
                .bind(amenity_id)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to attach amenity", e)
                })?;
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit room creation", e)
        })?;
        Ok(room)
    }

    /// Apply a partial update; `None` fields are left untouched.
    pub async fn update(&self, id: Uuid, data: &UpdateRoom) -> AppResult<Room> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to start transaction", e)
        })?;

        let room = sqlx::query_as::<_, Room>(
            "UPDATE rooms SET \
                price_per_night = COALESCE($2, price_per_night), \
                discount_percentage = COALESCE($3, discount_percentage), \
                capacity = COALESCE($4, capacity), \
                status = COALESCE($5, status), \
                description = COALESCE($6, description) \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(data.price_per_night)
        .bind(data.discount_percentage)
        .bind(data.capacity)
        .bind(data.status)
        .bind(&data.description)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update room", e))?
        .ok_or_else(|| AppError::not_found(format!("Room {id} not found")))?;

        if let Some(amenity_ids) = &data.amenity_ids {
            sqlx::query("DELETE FROM room_amenities WHERE room_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to clear amenities", e)
                })?;
            for amenity_id in amenity_ids {
                sqlx::query("INSERT INTO room_amenities (room_id, amenity_id) VALUES ($1, $2)")
                    .bind(id)
                    .bind(amenity_id)
                    .execute(&mut *tx)
                    .await
                    .map_err(|e| {
                        AppError::with_source(ErrorKind::Database, "Failed to attach amenity", e)
                    })?;
            }
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit room update", e)
        })?;
        Ok(room)
    }

    /// Look up a room type.
    pub async fn find_room_type(&self, id: Uuid) -> AppResult<Option<RoomType>> {
        sqlx::query_as::<_, RoomType>("SELECT * FROM room_types WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find room type", e))
    }

    /// Amenities attached to a room.
    pub async fn find_amenities(&self, room_id: Uuid) -> AppResult<Vec<Amenity>> {
        sqlx::query_as::<_, Amenity>(
            "SELECT a.* FROM amenities a \
             JOIN room_amenities ra ON ra.amenity_id = a.id \
             WHERE ra.room_id = $1 ORDER BY a.name ASC",
        )
        .bind(room_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list amenities", e))
    }
}

#[async_trait]
impl RoomRepository for PgRoomRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Room>> {
        sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find room", e))
    }
}
