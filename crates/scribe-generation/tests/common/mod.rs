//! In-memory generation endpoint for orchestrator tests.

#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use scribe_core::errors::{ScribeResult, TransportError};
use scribe_core::models::{
    FieldValue, GenerateMultipleRequest, GenerateMultipleResponse, GenerateRequest,
    GenerateResponse, HealthStatus, ValidationReport,
};
use scribe_core::traits::GenerationEndpoint;
use tokio::sync::Notify;

/// Answers from a fixed table of values; fields without a value are declined.
#[derive(Default)]
pub struct FakeEndpoint {
    values: Mutex<HashMap<String, FieldValue>>,
    warnings: Mutex<Vec<String>>,
    requests: Mutex<Vec<GenerateRequest>>,
    batch_requests: Mutex<Vec<GenerateMultipleRequest>>,
    calls: AtomicUsize,
    offline: AtomicBool,
    gate: Option<Arc<Notify>>,
}

impl FakeEndpoint {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every request waits on `gate` before answering.
    pub fn gated(gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::default()
        }
    }

    pub fn with_value(self, field: &str, value: impl Into<FieldValue>) -> Self {
        self.set_value(field, value);
        self
    }

    pub fn set_value(&self, field: &str, value: impl Into<FieldValue>) {
        self.values.lock().unwrap().insert(field.to_string(), value.into());
    }

    pub fn with_warning(self, warning: &str) -> Self {
        self.warnings.lock().unwrap().push(warning.to_string());
        self
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn batch_requests(&self) -> Vec<GenerateMultipleRequest> {
        self.batch_requests.lock().unwrap().clone()
    }

    async fn enter(&self) -> ScribeResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
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

impl GenerationEndpoint for FakeEndpoint {
    async fn generate(&self, request: &GenerateRequest) -> ScribeResult<GenerateResponse> {
        self.requests.lock().unwrap().push(request.clone());
        self.enter().await?;
        let value = self.values.lock().unwrap().get(&request.field).cloned();
        let warnings = self.warnings.lock().unwrap().clone();
        Ok(match value {
            Some(value) => GenerateResponse {
                success: true,
                value: Some(value),
                validation: Some(ValidationReport {
                    valid: Some(warnings.is_empty()),
                    warnings,
                    ..ValidationReport::default()
                }),
                ..GenerateResponse::default()
            },
            None => GenerateResponse {
                success: false,
                message: Some("Modèle indisponible".to_string()),
                ..GenerateResponse::default()
            },
        })
    }

    async fn generate_multiple(
        &self,
        request: &GenerateMultipleRequest,
    ) -> ScribeResult<GenerateMultipleResponse> {
        self.batch_requests.lock().unwrap().push(request.clone());
        self.enter().await?;
        let values = self.values.lock().unwrap().clone();
        let mut results = BTreeMap::new();
        let mut errors = BTreeMap::new();
        for field in &request.fields {
            match values.get(field) {
                Some(value) => {
                    results.insert(field.clone(), value.clone());
                }
                None => {
                    errors.insert(field.clone(), "Génération impossible".to_string());
                }
            }
        }
        Ok(GenerateMultipleResponse {
            results,
            errors: (!errors.is_empty()).then_some(errors),
        })
    }

    async fn health(&self) -> ScribeResult<HealthStatus> {
        self.enter().await?;
        Ok(HealthStatus {
            status: "ok".to_string(),
            model_loaded: Some(true),
        })
    }
}
