//! Hotel entities.

pub mod model;

pub use model::{CreateHotel, Hotel};
