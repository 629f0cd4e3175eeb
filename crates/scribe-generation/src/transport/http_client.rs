//! HTTP client for the inference service, over reqwest.
//!
//! Implements both [`GenerationEndpoint`] and [`FeedbackSink`], plus the
//! service's `/validate` and `/model/info` routes. No retry:
//! every failure goes straight back to the caller. No timeout unless one is
//! configured.

use std::time::Duration;

use scribe_core::config::EndpointConfig;
use scribe_core::errors::{ScribeResult, TransportError};
use scribe_core::models::{
    CorrectionRequest, CorrectionResponse, GenerateMultipleRequest, GenerateMultipleResponse,
    GenerateRequest, GenerateResponse, HealthStatus, ModelInfo, RatingRequest, RatingResponse,
    ValidateRequest, ValidateResponse,
};
use scribe_core::traits::{FeedbackSink, GenerationEndpoint};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Connection settings for [`HttpEndpoint`].
#[derive(Debug, Clone)]
pub struct HttpEndpointConfig {
    /// Base URL, without trailing slash.
    pub base_url: String,
    pub timeout: Option<Duration>,
}

impl From<&EndpointConfig> for HttpEndpointConfig {
    fn from(config: &EndpointConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.timeout_secs.map(Duration::from_secs),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpEndpoint {
    config: HttpEndpointConfig,
    client: reqwest::Client,
}

impl HttpEndpoint {
    pub fn new(config: HttpEndpointConfig) -> ScribeResult<Self> {
        let mut builder = reqwest::Client::builder().gzip(true);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| TransportError::Unreachable {
            url: config.base_url.clone(),
            reason: format!("client setup failed: {e}"),
        })?;
        Ok(Self { config, client })
    }

    pub fn from_config(config: &EndpointConfig) -> ScribeResult<Self> {
        Self::new(HttpEndpointConfig::from(config))
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Ask the service to check a field value. Findings come back as
    /// `validation.warnings`; the call itself only fails on transport errors.
    pub async fn validate(&self, request: &ValidateRequest) -> ScribeResult<ValidateResponse> {
        self.post("/validate", request).await
    }

    pub async fn model_info(&self) -> ScribeResult<ModelInfo> {
        self.get("/model/info").await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    async fn post<Req, Resp>(&self, path: &str, payload: &Req) -> ScribeResult<Resp>
    where
        Req: Serialize + Sync,
        Resp: DeserializeOwned,
    {
        let url = self.url(path);
        tracing::debug!(url = %url, "POST");
        let response = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(|e| unreachable_error(&url, e))?;
        decode(&url, response).await
    }

    async fn get<Resp: DeserializeOwned>(&self, path: &str) -> ScribeResult<Resp> {
        let url = self.url(path);
        tracing::debug!(url = %url, "GET");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| unreachable_error(&url, e))?;
        decode(&url, response).await
    }
}

impl GenerationEndpoint for HttpEndpoint {
    async fn generate(&self, request: &GenerateRequest) -> ScribeResult<GenerateResponse> {
        self.post("/generate", request).await
    }

    async fn generate_multiple(
        &self,
        request: &GenerateMultipleRequest,
    ) -> ScribeResult<GenerateMultipleResponse> {
        self.post("/generate_multiple", request).await
    }

    async fn health(&self) -> ScribeResult<HealthStatus> {
        self.get("/health").await
    }
}

impl FeedbackSink for HttpEndpoint {
    async fn submit_rating(&self, request: &RatingRequest) -> ScribeResult<RatingResponse> {
        self.post("/feedback/rating", request).await
    }

    async fn submit_correction(
        &self,
        request: &CorrectionRequest,
    ) -> ScribeResult<CorrectionResponse> {
        self.post("/feedback/correction", request).await
    }
}

fn unreachable_error(url: &str, error: reqwest::Error) -> TransportError {
    tracing::warn!(url = %url, error = %error, "endpoint unreachable");
    TransportError::Unreachable {
        url: url.to_string(),
        reason: error.to_string(),
    }
}

async fn decode<Resp: DeserializeOwned>(url: &str, response: reqwest::Response) -> ScribeResult<Resp> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(url = %url, status = %status, "endpoint returned an error status");
        return Err(TransportError::Status {
            status: status.as_u16(),
            detail: error_detail(&body),
        }
        .into());
    }
    let body = response.bytes().await.map_err(|e| TransportError::Decode {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    serde_json::from_slice(&body).map_err(|e| {
        TransportError::Decode {
            url: url.to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}

/// The server's `detail` field when the body carries one, else the raw body.
fn error_detail(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::Object(map)) => match map.get("detail") {
            Some(serde_json::Value::String(detail)) => detail.clone(),
            Some(other) => other.to_string(),
            None => body.trim().to_string(),
        },
        _ => body.trim().to_string(),
    }
}
