//! Feedback entities.

pub mod model;

pub use model::{CreateFeedback, Feedback};
