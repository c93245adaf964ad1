//! Hotel entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A hotel that owns bookable rooms.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Hotel {
    /// Unique hotel identifier.
    pub id: Uuid,
    /// Hotel name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// Country.
    pub country: String,
    /// Star rating, 1–5.
    pub star_rating: i32,
    /// Contact phone number.
    pub phone: String,
    /// Contact email, unique across hotels.
    pub email: String,
    /// When the hotel was created.
    pub created_at: DateTime<Utc>,
    /// When the hotel was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new hotel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateHotel {
    /// Hotel name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// Country.
    pub country: String,
    /// Star rating, 1–5.
    pub star_rating: i32,
    /// Contact phone number.
    pub phone: String,
    /// Contact email.
    pub email: String,
}
