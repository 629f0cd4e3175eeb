//! Field registry consistency errors, raised by startup validation only.

use super::error_code::{self, ScribeErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("field {field} lists itself as relevant context")]
    SelfReference { field: String },

    #[error("field {field} lists unknown relevant field {relevant}")]
    UnknownRelevantField { field: String, relevant: String },

    #[error("model name {model_name} is claimed by both {first} and {second}")]
    RenameCollision {
        model_name: String,
        first: String,
        second: String,
    },
}

impl ScribeErrorCode for RegistryError {
    fn error_code(&self) -> &'static str {
        error_code::REGISTRY_ERROR
    }

    fn user_message(&self) -> String {
        "Le registre des champs est incohérent.".to_string()
    }
}
