//! Blog author profiles.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Extended author profile, created at registration when a bio is given.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BlogProfile {
    pub user_id: Uuid,
    pub bio: String,
}
