//! Hotel and room management.

pub mod service;

pub use service::{HotelService, RoomDetail};
