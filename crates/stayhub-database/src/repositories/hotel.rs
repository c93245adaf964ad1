//! Hotel repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use stayhub_core::error::{AppError, ErrorKind};
use stayhub_core::result::AppResult;
use stayhub_core::types::pagination::{PageRequest, PageResponse};
use stayhub_entity::hotel::{CreateHotel, Hotel};

/// Repository for hotel CRUD operations.
#[derive(Debug, Clone)]
pub struct HotelRepository {
    pool: PgPool,
}

impl HotelRepository {
    /// Create a new hotel repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a hotel by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Hotel>> {
        sqlx::query_as::<_, Hotel>("SELECT * FROM hotels WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find hotel", e))
    }

    /// List hotels with pagination, ordered by name.
    pub async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<Hotel>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM hotels")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count hotels", e))?;

        let hotels = sqlx::query_as::<_, Hotel>(
            "SELECT * FROM hotels ORDER BY name ASC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list hotels", e))?;

        Ok(PageResponse::new(
            hotels,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Create a new hotel. Hotel emails are unique.
    pub async fn create(&self, data: &CreateHotel) -> AppResult<Hotel> {
        sqlx::query_as::<_, Hotel>(
            "INSERT INTO hotels \
             (name, description, address, city, country, star_rating, phone, email) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.address)
        .bind(&data.city)
        .bind(&data.country)
        .bind(data.star_rating)
        .bind(&data.phone)
        .bind(&data.email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("hotels_email_key") =>
            {
                AppError::conflict(format!("A hotel with email '{}' already exists", data.email))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create hotel", e),
        })
    }

    /// Number of rooms belonging to a hotel.
    pub async fn rooms_count(&self, hotel_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM rooms WHERE hotel_id = $1")
            .bind(hotel_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count rooms", e))
    }
}
