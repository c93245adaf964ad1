//! # stayhub-service
//!
//! Business logic service layer for StayHub. Each service orchestrates
//! repositories to implement application-level use cases; the booking
//! engine is the heart of the crate.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod blog;
pub mod booking;
pub mod feedback;
pub mod hotel;
pub mod review;
pub mod user;
pub mod validation;

pub use blog::BlogService;
pub use booking::{BookingEngine, BookingRequest};
pub use feedback::FeedbackService;
pub use hotel::HotelService;
pub use review::ReviewService;
pub use user::{PasswordHasher, UserService};
