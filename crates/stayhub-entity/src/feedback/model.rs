//! Site feedback entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A feedback record: one message per email address.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Feedback {
    pub id: Uuid,
    /// Sender address, unique across feedback rows. Not exposed in
    /// API representations.
    #[serde(skip_serializing)]
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Data required to submit feedback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFeedback {
    pub email: String,
    pub message: String,
}
