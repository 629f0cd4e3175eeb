use std::future::Future;

use crate::errors::ScribeResult;
use crate::models::{
    GenerateMultipleRequest, GenerateMultipleResponse, GenerateRequest, GenerateResponse,
    HealthStatus,
};

/// The fine-tuned model behind its inference service.
///
/// Implementations surface transport failures as `TransportError` and return
/// well-formed responses verbatim, `success: false` included. Callers decide
/// what a declined generation means.
pub trait GenerationEndpoint: Send + Sync {
    /// Generate one field.
    fn generate(
        &self,
        request: &GenerateRequest,
    ) -> impl Future<Output = ScribeResult<GenerateResponse>> + Send;

    /// Generate several fields from one shared context.
    fn generate_multiple(
        &self,
        request: &GenerateMultipleRequest,
    ) -> impl Future<Output = ScribeResult<GenerateMultipleResponse>> + Send;

    /// Liveness probe.
    fn health(&self) -> impl Future<Output = ScribeResult<HealthStatus>> + Send;
}
