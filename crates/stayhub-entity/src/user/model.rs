//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A registered user of the StayHub platform.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Unique login name.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Phone number in `+998XXXXXXXXX` format.
    pub phone_number: String,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Full display name, `"first last"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Desired username.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Phone number.
    pub phone_number: String,
}

/// Compact user representation nested inside booking and review payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    /// User identifier.
    pub id: Uuid,
    /// Username.
    pub username: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_joins_first_and_last() {
        let user = User {
            id: Uuid::new_v4(),
            username: "aziz".to_string(),
            email: "aziz@example.com".to_string(),
            password_hash: String::new(),
            first_name: "Aziz".to_string(),
            last_name: "Karimov".to_string(),
            phone_number: "+998901234567".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert_eq!(user.full_name(), "Aziz Karimov");
    }
}
