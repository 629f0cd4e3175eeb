//! JSON wire protocol spoken with the generation endpoint.
//!
//! Field names in every request are in model vocabulary.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{FieldValue, Strategy};

/// Single-field generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub field: String,
    pub context: String,
    pub strategy: Strategy,
}

/// Single-field generation response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub success: bool,
    #[serde(default)]
    pub value: Option<FieldValue>,
    #[serde(default)]
    pub validation: Option<ValidationReport>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
    /// Endpoint-supplied reason when `success` is false.
    #[serde(default, alias = "detail")]
    pub message: Option<String>,
}

impl GenerateResponse {
    pub fn warnings(&self) -> &[String] {
        self.validation
            .as_ref()
            .map(|v| v.warnings.as_slice())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    #[serde(default)]
    pub valid: Option<bool>,
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
}

/// Batched generation request, one shared context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateMultipleRequest {
    pub fields: Vec<String>,
    pub context: String,
    pub strategy: Strategy,
}

/// Batched generation response. `errors` is `null` when every field succeeded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateMultipleResponse {
    #[serde(default)]
    pub results: BTreeMap<String, FieldValue>,
    #[serde(default)]
    pub errors: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingRequest {
    pub field: String,
    pub value: Option<FieldValue>,
    pub rating: u8,
    pub context: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RatingResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrectionRequest {
    pub field: String,
    pub original: FieldValue,
    pub corrected: FieldValue,
    pub context: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorrectionResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub insights: Option<CorrectionInsights>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorrectionInsights {
    #[serde(default)]
    pub recommendations: Vec<String>,
}

/// Server-side check of one field value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidateRequest {
    pub field: String,
    pub value: FieldValue,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub context: BTreeMap<String, FieldValue>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidateResponse {
    pub success: bool,
    #[serde(default)]
    pub validation: ValidationReport,
}

/// Description of the model loaded behind the endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    #[serde(default)]
    pub model_type: String,
    #[serde(default)]
    pub loaded: bool,
    #[serde(default)]
    pub device: Option<String>,
    #[serde(default)]
    pub quantization: Option<bool>,
    #[serde(default)]
    pub capabilities: ModelCapabilities,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelCapabilities {
    #[serde(default)]
    pub fields: Vec<String>,
    #[serde(default)]
    pub table_fields: Vec<String>,
}

/// Health probe response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub model_loaded: Option<bool>,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiple_response_accepts_null_errors() {
        let resp: GenerateMultipleResponse =
            serde_json::from_str(r#"{"success":true,"results":{"besoin":"x"},"errors":null}"#)
                .unwrap();
        assert_eq!(resp.results.len(), 1);
        assert!(resp.errors.is_none());
    }

    #[test]
    fn generate_response_reads_detail_as_message() {
        let resp: GenerateResponse =
            serde_json::from_str(r#"{"success":false,"detail":"Modèle non chargé"}"#).unwrap();
        assert_eq!(resp.message.as_deref(), Some("Modèle non chargé"));
        assert!(resp.warnings().is_empty());
    }
}
