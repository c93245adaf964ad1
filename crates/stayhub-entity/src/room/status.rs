//! Room status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operational status of a room.
///
/// Only `Available` rooms appear as bookable in listings; the booking
/// engine itself guards against double-booking through date-range
/// overlap, not through this flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "room_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    /// Open for new reservations.
    Available,
    /// Currently occupied by a guest.
    Occupied,
    /// Taken out of service.
    Maintenance,
}

impl RoomStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Occupied => "occupied",
            Self::Maintenance => "maintenance",
        }
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RoomStatus {
    type Err = stayhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "available" => Ok(Self::Available),
            "occupied" => Ok(Self::Occupied),
            "maintenance" => Ok(Self::Maintenance),
            _ => Err(stayhub_core::AppError::validation(format!(
                "Invalid room status: '{s}'. Expected one of: available, occupied, maintenance"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_roundtrip() {
        for status in [
            RoomStatus::Available,
            RoomStatus::Occupied,
            RoomStatus::Maintenance,
        ] {
            assert_eq!(status.as_str().parse::<RoomStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_invalid_status_rejected() {
        assert!("cleaning".parse::<RoomStatus>().is_err());
    }
}
