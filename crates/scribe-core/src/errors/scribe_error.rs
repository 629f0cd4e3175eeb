//! Top-level error aggregating every subsystem via `From` conversions.

use super::error_code::ScribeErrorCode;
use super::{ConfigError, FeedbackError, GenerationError, RegistryError, TransportError};

pub type ScribeResult<T> = Result<T, ScribeError>;

#[derive(Debug, thiserror::Error)]
pub enum ScribeError {
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("Feedback error: {0}")]
    Feedback(#[from] FeedbackError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),
}

impl ScribeErrorCode for ScribeError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Transport(e) => e.error_code(),
            Self::Generation(e) => e.error_code(),
            Self::Feedback(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Registry(e) => e.error_code(),
        }
    }

    fn user_message(&self) -> String {
        match self {
            Self::Transport(e) => e.user_message(),
            Self::Generation(e) => e.user_message(),
            Self::Feedback(e) => e.user_message(),
            Self::Config(e) => e.user_message(),
            Self::Registry(e) => e.user_message(),
        }
    }
}
