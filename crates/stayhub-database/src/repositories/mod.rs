//! Repository implementations for all StayHub entities.

pub mod booking;
pub mod category;
pub mod comment;
pub mod engagement;
pub mod feedback;
pub mod hotel;
pub mod post;
pub mod review;
pub mod room;
pub mod traits;
pub mod user;

pub use booking::PgBookingRepository;
pub use category::CategoryRepository;
pub use comment::CommentRepository;
pub use engagement::EngagementRepository;
pub use feedback::FeedbackRepository;
pub use hotel::HotelRepository;
pub use post::PostRepository;
pub use review::ReviewRepository;
pub use room::PgRoomRepository;
pub use traits::{BookingRepository, RoomRepository};
pub use user::UserRepository;
