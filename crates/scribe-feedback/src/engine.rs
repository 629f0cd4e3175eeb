//! FeedbackLoop: ratings and corrections of generated content.
//!
//! Both submissions carry the context the builder would produce for the
//! field *now*, not the one used at generation time. A correction is applied
//! locally (normalized, written, cache evicted) before it is forwarded, so a
//! sink failure never leaves the stale generation in the cache.

use std::sync::{Mutex, MutexGuard, PoisonError};

use scribe_context::{collect, ContextBuilder, FieldRegistry};
use scribe_core::constants::{MAX_RATING, MIN_RATING};
use scribe_core::errors::{FeedbackError, ScribeResult};
use scribe_core::models::{CorrectionRequest, FieldValue, Notice, ProjectSession, RatingRequest};
use scribe_core::traits::{FeedbackSink, GenerationEndpoint};
use scribe_generation::{GenerationCache, GenerationOrchestrator, SharedStrategy, TableNormalizer};
use tracing::info;

use crate::outcome::FeedbackOutcome;
use crate::stats::{FeedbackStats, FeedbackSummary, FieldInsights};

pub struct FeedbackLoop<S> {
    sink: S,
    builder: ContextBuilder,
    cache: GenerationCache,
    normalizer: TableNormalizer,
    strategy: SharedStrategy,
    stats: Mutex<FeedbackStats>,
}

impl<S: FeedbackSink> FeedbackLoop<S> {
    pub fn new(
        sink: S,
        builder: ContextBuilder,
        cache: GenerationCache,
        normalizer: TableNormalizer,
        strategy: SharedStrategy,
    ) -> Self {
        Self {
            sink,
            builder,
            cache,
            normalizer,
            strategy,
            stats: Mutex::new(FeedbackStats::new()),
        }
    }

    /// Share the orchestrator's builder, cache, normalizer and strategy.
    pub fn attached_to<E: GenerationEndpoint>(sink: S, orchestrator: &GenerationOrchestrator<E>) -> Self {
        Self::new(
            sink,
            orchestrator.builder().clone(),
            orchestrator.cache().clone(),
            *orchestrator.normalizer(),
            orchestrator.shared_strategy(),
        )
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    fn registry(&self) -> &FieldRegistry {
        self.builder.registry()
    }

    /// Rate the current value of `field` from 1 to 5.
    pub async fn submit_rating(
        &self,
        session: &ProjectSession,
        field: &str,
        rating: u8,
        comment: Option<&str>,
    ) -> ScribeResult<FeedbackOutcome> {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Ok(FeedbackOutcome::Skipped(Notice::RatingOutOfRange { rating }));
        }

        let model_field = self.registry().model_name_of(field).to_string();
        let ui_field = self.registry().ui_name_of(&model_field).to_string();
        let request = RatingRequest {
            value: session.get(&ui_field),
            rating,
            context: self.current_context(session, &model_field),
            comment: comment.map(str::to_string),
            field: model_field,
        };

        let response = self.sink.submit_rating(&request).await?;
        if !response.success {
            tracing::warn!(field = %ui_field, rating, "rating rejected by sink");
            return Err(FeedbackError::RatingRejected {
                field: ui_field,
                message: declined_message(response.message),
            }
            .into());
        }
        self.stats().record_rating(&ui_field, rating);
        info!(field = %ui_field, rating, "rating submitted");
        Ok(FeedbackOutcome::Sent {
            message: response.message,
            recommendations: Vec::new(),
        })
    }

    /// Replace a generated value with the user's correction.
    pub async fn submit_correction(
        &self,
        session: &ProjectSession,
        field: &str,
        original: FieldValue,
        corrected: FieldValue,
        reason: Option<&str>,
    ) -> ScribeResult<FeedbackOutcome> {
        if original == corrected {
            return Ok(FeedbackOutcome::Skipped(Notice::IdenticalCorrection {
                field: field.to_string(),
            }));
        }

        let model_field = self.registry().model_name_of(field).to_string();
        let ui_field = self.registry().ui_name_of(&model_field).to_string();
        let corrected = self.normalizer.prepare(self.registry(), &model_field, corrected);

        session.set(ui_field.clone(), corrected.clone());
        self.cache.invalidate_field(&model_field);
        self.stats().record_correction(&ui_field);

        let request = CorrectionRequest {
            context: self.current_context(session, &model_field),
            field: model_field,
            original,
            corrected,
            reason: reason.map(str::to_string),
        };
        let response = self.sink.submit_correction(&request).await.inspect_err(|e| {
            tracing::warn!(field = %ui_field, error = %e, "correction applied locally but not delivered");
        })?;
        if !response.success {
            tracing::warn!(field = %ui_field, "correction applied locally but rejected by sink");
            return Err(FeedbackError::CorrectionRejected {
                field: ui_field,
                message: declined_message(response.message),
            }
            .into());
        }
        info!(field = %ui_field, "correction submitted");
        Ok(FeedbackOutcome::Sent {
            message: response.message,
            recommendations: response.insights.map(|i| i.recommendations).unwrap_or_default(),
        })
    }

    /// Local statistics for one field (either vocabulary).
    pub fn insights(&self, field: &str) -> FieldInsights {
        let ui_field = self.registry().ui_name_of(self.registry().model_name_of(field));
        self.stats().insights(ui_field)
    }

    pub fn summary(&self) -> FeedbackSummary {
        self.stats().summary()
    }

    fn current_context(&self, session: &ProjectSession, model_field: &str) -> String {
        let context = collect(self.registry(), &session.snapshot());
        self.builder.build(model_field, &context, self.strategy.get()).text
    }

    fn stats(&self) -> MutexGuard<'_, FeedbackStats> {
        self.stats.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn declined_message(message: Option<String>) -> String {
    message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| "réponse sans succès".to_string())
}

impl<S> std::fmt::Debug for FeedbackLoop<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedbackLoop")
            .field("cache", &self.cache)
            .field("strategy", &self.strategy.get())
            .finish_non_exhaustive()
    }
}
