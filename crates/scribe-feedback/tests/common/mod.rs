//! In-memory collaborators for feedback tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use scribe_core::errors::{ScribeResult, TransportError};
use scribe_core::models::{
    CorrectionInsights, CorrectionRequest, CorrectionResponse, FieldValue,
    GenerateMultipleRequest, GenerateMultipleResponse, GenerateRequest, GenerateResponse,
    HealthStatus, RatingRequest, RatingResponse,
};
use scribe_core::traits::{FeedbackSink, GenerationEndpoint};

/// Endpoint answering from a mutable table of values.
#[derive(Default)]
pub struct FakeEndpoint {
    values: Mutex<HashMap<String, FieldValue>>,
    calls: AtomicUsize,
}

impl FakeEndpoint {
    pub fn with_value(self, field: &str, value: impl Into<FieldValue>) -> Self {
        self.set_value(field, value);
        self
    }

    pub fn set_value(&self, field: &str, value: impl Into<FieldValue>) {
        self.values.lock().unwrap().insert(field.to_string(), value.into());
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl GenerationEndpoint for FakeEndpoint {
    async fn generate(&self, request: &GenerateRequest) -> ScribeResult<GenerateResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let value = self.values.lock().unwrap().get(&request.field).cloned();
        Ok(GenerateResponse {
            success: value.is_some(),
            value,
            ..GenerateResponse::default()
        })
    }

    async fn generate_multiple(
        &self,
        _request: &GenerateMultipleRequest,
    ) -> ScribeResult<GenerateMultipleResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(GenerateMultipleResponse::default())
    }

    async fn health(&self) -> ScribeResult<HealthStatus> {
        Ok(HealthStatus {
            status: "ok".to_string(),
            model_loaded: Some(true),
        })
    }
}

/// Sink recording every submission.
#[derive(Default)]
pub struct RecordingSink {
    ratings: Mutex<Vec<RatingRequest>>,
    corrections: Mutex<Vec<CorrectionRequest>>,
    offline: AtomicBool,
    declining: AtomicBool,
}

impl RecordingSink {
    pub fn ratings(&self) -> Vec<RatingRequest> {
        self.ratings.lock().unwrap().clone()
    }

    pub fn corrections(&self) -> Vec<CorrectionRequest> {
        self.corrections.lock().unwrap().clone()
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Answer every submission with a well-formed `success: false`.
    pub fn set_declining(&self, declining: bool) {
        self.declining.store(declining, Ordering::SeqCst);
    }

    fn accepts(&self) -> bool {
        !self.declining.load(Ordering::SeqCst)
    }

    fn check_online(&self) -> ScribeResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(TransportError::Unreachable {
                url: "http://fake".to_string(),
                reason: "connection refused".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

impl FeedbackSink for RecordingSink {
    async fn submit_rating(&self, request: &RatingRequest) -> ScribeResult<RatingResponse> {
        self.check_online()?;
        self.ratings.lock().unwrap().push(request.clone());
        if !self.accepts() {
            return Ok(RatingResponse {
                success: false,
                message: Some("Feedback service indisponible".to_string()),
            });
        }
        Ok(RatingResponse {
            success: true,
            message: Some("Merci pour votre retour !".to_string()),
        })
    }

    async fn submit_correction(
        &self,
        request: &CorrectionRequest,
    ) -> ScribeResult<CorrectionResponse> {
        self.check_online()?;
        self.corrections.lock().unwrap().push(request.clone());
        if !self.accepts() {
            return Ok(CorrectionResponse {
                success: false,
                message: None,
                insights: None,
            });
        }
        Ok(CorrectionResponse {
            success: true,
            message: Some("Correction enregistrée avec succès".to_string()),
            insights: Some(CorrectionInsights {
                recommendations: vec![format!(
                    "Améliorer la génération pour le champ {}",
                    request.field
                )],
            }),
        })
    }
}
