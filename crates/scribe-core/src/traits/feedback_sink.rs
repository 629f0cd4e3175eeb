use std::future::Future;

use crate::errors::ScribeResult;
use crate::models::{CorrectionRequest, CorrectionResponse, RatingRequest, RatingResponse};

/// Receiver of user ratings and corrections.
pub trait FeedbackSink: Send + Sync {
    fn submit_rating(
        &self,
        request: &RatingRequest,
    ) -> impl Future<Output = ScribeResult<RatingResponse>> + Send;

    fn submit_correction(
        &self,
        request: &CorrectionRequest,
    ) -> impl Future<Output = ScribeResult<CorrectionResponse>> + Send;
}
