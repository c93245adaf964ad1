//! Room entities.

pub mod model;
pub mod status;

pub use model::{Amenity, CreateRoom, Room, RoomType, UpdateRoom};
pub use status::RoomStatus;
