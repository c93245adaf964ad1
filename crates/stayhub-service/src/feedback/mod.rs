//! Site feedback.

pub mod service;

pub use service::FeedbackService;
