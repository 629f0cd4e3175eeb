//! Transport errors between the core and the generation endpoint.

use super::error_code::{self, ScribeErrorCode};

/// Failures talking to the external endpoint. Never retried.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("endpoint unreachable at {url}: {reason}")]
    Unreachable { url: String, reason: String },

    #[error("endpoint returned HTTP {status}: {detail}")]
    Status { status: u16, detail: String },

    #[error("malformed response from {url}: {reason}")]
    Decode { url: String, reason: String },
}

impl ScribeErrorCode for TransportError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Unreachable { .. } => error_code::TRANSPORT_ERROR,
            Self::Status { .. } => error_code::ENDPOINT_STATUS,
            Self::Decode { .. } => error_code::DECODE_ERROR,
        }
    }

    fn user_message(&self) -> String {
        match self {
            Self::Unreachable { .. } => "Le service de génération est injoignable.".to_string(),
            Self::Status { status, detail } if !detail.is_empty() => {
                format!("Erreur du service de génération ({status}) : {detail}")
            }
            Self::Status { status, .. } => {
                format!("Erreur du service de génération ({status}).")
            }
            Self::Decode { .. } => "Réponse invalide du service de génération.".to_string(),
        }
    }
}
