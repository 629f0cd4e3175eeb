use scribe_core::errors::{
    FeedbackError, GenerationError, ScribeError, ScribeErrorCode, TransportError,
};

#[test]
fn codes_propagate_through_aggregate() {
    let err: ScribeError = TransportError::Status {
        status: 503,
        detail: "Modèle non chargé".to_string(),
    }
    .into();
    assert_eq!(err.error_code(), "ENDPOINT_STATUS");
    assert!(err.user_message().contains("Modèle non chargé"));
    assert!(err.coded_string().starts_with("[ENDPOINT_STATUS]"));
}

#[test]
fn declined_generation_surfaces_endpoint_message() {
    let err: ScribeError = GenerationError::Declined {
        field: "besoin".to_string(),
        message: "contexte insuffisant".to_string(),
    }
    .into();
    assert_eq!(err.error_code(), "GENERATION_DECLINED");
    assert_eq!(err.user_message(), "Génération refusée : contexte insuffisant");
}

#[test]
fn user_messages_hide_raw_transport_detail() {
    let err = TransportError::Unreachable {
        url: "http://localhost:5000/generate".to_string(),
        reason: "tcp connect error: Connection refused (os error 111)".to_string(),
    };
    assert!(!err.user_message().contains("os error"));
}

#[test]
fn rejected_feedback_has_its_own_code() {
    let err: ScribeError = FeedbackError::RatingRejected {
        field: "besoin".to_string(),
        message: "service indisponible".to_string(),
    }
    .into();
    assert_eq!(err.error_code(), "FEEDBACK_REJECTED");
    assert_eq!(err.user_message(), "Note non enregistrée : service indisponible");
}
