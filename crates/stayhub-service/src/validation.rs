//! Field validation rules shared across services.

use stayhub_core::error::AppError;
use stayhub_core::result::AppResult;

/// Phone numbers must be in the national `+998XXXXXXXXX` format.
pub fn validate_phone_number(phone: &str) -> AppResult<()> {
    if !phone.starts_with("+998") {
        return Err(AppError::validation(
            "Phone number must start with '+998'",
        ));
    }
    if phone.len() != 13 {
        return Err(AppError::validation(
            "Phone number must be exactly 13 characters long",
        ));
    }
    Ok(())
}

/// Usernames contain only ASCII alphanumerics and underscores.
pub fn validate_username(username: &str) -> AppResult<()> {
    if username.is_empty() {
        return Err(AppError::validation("Username cannot be empty"));
    }
    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(AppError::validation(
            "Username may only contain letters, digits, and underscores",
        ));
    }
    Ok(())
}

/// Passwords must contain at least one uppercase letter and one digit.
pub fn validate_password_strength(password: &str) -> AppResult<()> {
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(AppError::validation(
            "Password must contain at least one uppercase letter",
        ));
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(AppError::validation(
            "Password must contain at least one digit",
        ));
    }
    Ok(())
}

/// Star ratings run from 1 to 5.
pub fn validate_star_rating(rating: i32) -> AppResult<()> {
    if !(1..=5).contains(&rating) {
        return Err(AppError::validation("Star rating must be between 1 and 5"));
    }
    Ok(())
}

/// Review ratings run from 1 to 5.
pub fn validate_rating(name: &str, rating: i32) -> AppResult<()> {
    if !(1..=5).contains(&rating) {
        return Err(AppError::validation(format!(
            "{name} must be between 1 and 5"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_number_format() {
        assert!(validate_phone_number("+998901234567").is_ok());
        assert!(validate_phone_number("+199901234567").is_err());
        assert!(validate_phone_number("+99890123456").is_err());
        assert!(validate_phone_number("+9989012345678").is_err());
    }

    #[test]
    fn test_username_charset() {
        assert!(validate_username("guest_42").is_ok());
        assert!(validate_username("guest-42").is_err());
        assert!(validate_username("").is_err());
    }

    #[test]
    fn test_password_strength() {
        assert!(validate_password_strength("Sunrise7").is_ok());
        assert!(validate_password_strength("sunrise7").is_err());
        assert!(validate_password_strength("Sunrise").is_err());
    }

    #[test]
    fn test_rating_bounds() {
        assert!(validate_rating("Comfort rating", 1).is_ok());
        assert!(validate_rating("Comfort rating", 5).is_ok());
        assert!(validate_rating("Comfort rating", 0).is_err());
        assert!(validate_rating("Comfort rating", 6).is_err());
    }
}
