//! Errors reported by a well-formed generation response.

use super::error_code::{self, ScribeErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("generation declined for {field}: {message}")]
    Declined { field: String, message: String },

    #[error("generation for {field} returned no value")]
    EmptyValue { field: String },
}

impl ScribeErrorCode for GenerationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Declined { .. } => error_code::GENERATION_DECLINED,
            Self::EmptyValue { .. } => error_code::EMPTY_GENERATION,
        }
    }

    fn user_message(&self) -> String {
        match self {
            Self::Declined { message, .. } => format!("Génération refusée : {message}"),
            Self::EmptyValue { field } => format!("Aucun contenu généré pour « {field} »."),
        }
    }
}
