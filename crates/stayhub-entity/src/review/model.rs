//! Room review entity model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A guest review of a room, scored on four aspects.
///
/// Each rating is an integer from 1 to 5. A user may leave at most one
/// review per room; the repository enforces this with a unique index.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RoomReview {
    /// Unique review identifier.
    pub id: Uuid,
    /// Reviewed room.
    pub room_id: Uuid,
    /// Reviewing user.
    pub user_id: Uuid,
    /// Cleanliness rating, 1–5.
    pub cleanliness_rating: i32,
    /// Comfort rating, 1–5.
    pub comfort_rating: i32,
    /// Service rating, 1–5.
    pub service_rating: i32,
    /// Overall rating, 1–5.
    pub overall_rating: i32,
    /// Free-form review text, at least 10 characters.
    pub comment: String,
    /// When the review was posted.
    pub created_at: DateTime<Utc>,
}

impl RoomReview {
    /// Mean of the four aspect ratings, rounded to two decimal places.
    pub fn average_rating(&self) -> Decimal {
        let sum = Decimal::from(
            self.cleanliness_rating + self.comfort_rating + self.service_rating + self.overall_rating,
        );
        (sum / Decimal::from(4)).round_dp(2)
    }
}

/// Data required to post a review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReview {
    pub room_id: Uuid,
    pub user_id: Uuid,
    pub cleanliness_rating: i32,
    pub comfort_rating: i32,
    pub service_rating: i32,
    pub overall_rating: i32,
    pub comment: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(cleanliness: i32, comfort: i32, service: i32, overall: i32) -> RoomReview {
        RoomReview {
            id: Uuid::new_v4(),
            room_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            cleanliness_rating: cleanliness,
            comfort_rating: comfort,
            service_rating: service,
            overall_rating: overall,
            comment: "Spotless, would stay again.".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_average_rating_rounds_to_two_places() {
        // (5 + 4 + 4 + 4) / 4 = 4.25
        assert_eq!(
            review(5, 4, 4, 4).average_rating(),
            "4.25".parse::<Decimal>().unwrap()
        );
        // (5 + 5 + 5 + 4) / 4 = 4.75
        assert_eq!(
            review(5, 5, 5, 4).average_rating(),
            "4.75".parse::<Decimal>().unwrap()
        );
    }

    #[test]
    fn test_average_rating_uniform() {
        assert_eq!(
            review(3, 3, 3, 3).average_rating(),
            Decimal::from(3).round_dp(2)
        );
    }
}
