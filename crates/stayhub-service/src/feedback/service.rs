//! Feedback intake and updates.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use stayhub_core::error::AppError;
use stayhub_core::result::AppResult;
use stayhub_database::repositories::feedback::FeedbackRepository;
use stayhub_entity::feedback::{CreateFeedback, Feedback};

/// Manages site feedback records.
#[derive(Debug, Clone)]
pub struct FeedbackService {
    feedback_repo: Arc<FeedbackRepository>,
}

impl FeedbackService {
    /// Creates a new feedback service.
    pub fn new(feedback_repo: Arc<FeedbackRepository>) -> Self {
        Self { feedback_repo }
    }

    /// Submit feedback. One record per email address.
    pub async fn submit(&self, req: CreateFeedback) -> AppResult<Feedback> {
        Self::validate_message(&req.message)?;
        if !req.email.contains('@') {
            return Err(AppError::validation("A valid email address is required"));
        }

        let feedback = self.feedback_repo.create(&req).await?;
        info!(feedback_id = %feedback.id, "Feedback submitted");
        Ok(feedback)
    }

    /// Get a feedback record by ID.
    pub async fn get(&self, id: Uuid) -> AppResult<Feedback> {
        self.feedback_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Feedback {id} not found")))
    }

    /// Replace the message of a feedback record.
    pub async fn update_message(&self, id: Uuid, message: &str) -> AppResult<Feedback> {
        Self::validate_message(message)?;
        self.feedback_repo.update_message(id, message).await
    }

    fn validate_message(message: &str) -> AppResult<()> {
        if message.trim().len() < 10 {
            return Err(AppError::validation(
                "Feedback message must be at least 10 characters long",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_length_floor() {
        assert!(FeedbackService::validate_message("Lovely stay, thank you!").is_ok());
        assert!(FeedbackService::validate_message("Short").is_err());
        assert!(FeedbackService::validate_message("         x").is_err());
    }
}
