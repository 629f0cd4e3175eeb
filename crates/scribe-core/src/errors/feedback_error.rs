//! Errors reported by a well-formed feedback reply.

use super::error_code::{self, ScribeErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum FeedbackError {
    #[error("rating for {field} rejected: {message}")]
    RatingRejected { field: String, message: String },

    #[error("correction for {field} rejected: {message}")]
    CorrectionRejected { field: String, message: String },
}

impl ScribeErrorCode for FeedbackError {
    fn error_code(&self) -> &'static str {
        error_code::FEEDBACK_REJECTED
    }

    fn user_message(&self) -> String {
        match self {
            Self::RatingRejected { message, .. } => format!("Note non enregistrée : {message}"),
            Self::CorrectionRejected { message, .. } => {
                format!("Correction appliquée mais non transmise : {message}")
            }
        }
    }
}
