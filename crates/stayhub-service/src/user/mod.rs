//! User registration and lookup.

pub mod password;
pub mod service;

pub use password::PasswordHasher;
pub use service::{RegisterUser, UserService};
