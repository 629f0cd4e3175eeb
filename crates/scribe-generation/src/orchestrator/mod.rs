//! Generation Orchestrator: owns the request lifecycle between the UI and
//! the generation endpoint.
//!
//! One generation at a time across the whole orchestrator (single-flight),
//! no automatic retry, no partial application: the session is only written
//! after a successful response. Session locks are never held across an
//! await; only the flight slot spans the request.

mod flight;
pub mod outcome;
pub mod shared_strategy;

use std::collections::BTreeMap;
use std::sync::Arc;

use scribe_context::{collect, BuiltContext, ContextBuilder, FieldRegistry};
use scribe_core::errors::{GenerationError, ScribeResult};
use scribe_core::models::{
    FieldValue, GenerateMultipleRequest, GenerateRequest, GenerateResponse, HealthStatus,
    ModelContext, Notice, ProjectSession, Strategy,
};
use scribe_core::traits::GenerationEndpoint;
use scribe_core::ScribeConfig;

use crate::cache::GenerationCache;
use crate::normalize::TableNormalizer;

use self::flight::FlightSlot;
pub use self::outcome::{BatchOutcome, BatchReport, FieldOutcome};
pub use self::shared_strategy::SharedStrategy;

pub struct GenerationOrchestrator<E> {
    endpoint: E,
    builder: ContextBuilder,
    cache: GenerationCache,
    normalizer: TableNormalizer,
    strategy: SharedStrategy,
    flight: FlightSlot,
    batch_target: String,
    max_batch_fields: usize,
}

impl<E: GenerationEndpoint> GenerationOrchestrator<E> {
    /// Wire an orchestrator from configuration.
    pub fn new(endpoint: E, registry: Arc<FieldRegistry>, config: &ScribeConfig) -> Self {
        let builder = ContextBuilder::with_seed(registry, config.generation.exploration_seed);
        Self::with_builder(endpoint, builder, config)
    }

    /// Same as [`GenerationOrchestrator::new`] with a caller-supplied builder.
    pub fn with_builder(endpoint: E, builder: ContextBuilder, config: &ScribeConfig) -> Self {
        Self {
            endpoint,
            builder,
            cache: GenerationCache::from_config(&config.cache),
            normalizer: TableNormalizer::from_config(&config.tables),
            strategy: SharedStrategy::new(config.default_strategy()),
            flight: FlightSlot::default(),
            batch_target: config.generation.batch_context_target.clone(),
            max_batch_fields: config.generation.max_batch_fields,
        }
    }

    pub fn with_cache(mut self, cache: GenerationCache) -> Self {
        self.cache = cache;
        self
    }

    pub fn with_normalizer(mut self, normalizer: TableNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    pub fn endpoint(&self) -> &E {
        &self.endpoint
    }

    pub fn builder(&self) -> &ContextBuilder {
        &self.builder
    }

    pub fn registry(&self) -> &FieldRegistry {
        self.builder.registry()
    }

    /// Shared handle on the result cache.
    pub fn cache(&self) -> &GenerationCache {
        &self.cache
    }

    pub fn normalizer(&self) -> &TableNormalizer {
        &self.normalizer
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy.get()
    }

    pub fn set_strategy(&self, strategy: Strategy) {
        self.strategy.set(strategy);
        tracing::info!(strategy = %strategy, "generation strategy changed");
    }

    /// Handle that follows every later [`set_strategy`](Self::set_strategy).
    pub fn shared_strategy(&self) -> SharedStrategy {
        self.strategy.clone()
    }

    pub fn is_generating(&self) -> bool {
        self.flight.current().is_some()
    }

    /// Label of the generation in flight, if any.
    pub fn in_flight_field(&self) -> Option<String> {
        self.flight.current()
    }

    /// Build the context the endpoint would receive for `field` right now.
    pub fn context_for(&self, session: &ProjectSession, field: &str) -> BuiltContext {
        let context = self.model_context(session);
        self.builder.build(field, &context, self.strategy())
    }

    /// Generate one field, serving from the cache when possible.
    pub async fn generate_field(
        &self,
        session: &ProjectSession,
        field: &str,
    ) -> ScribeResult<FieldOutcome> {
        let _flight = match self.flight.try_begin(field) {
            Ok(guard) => guard,
            Err(in_flight) => return Ok(in_progress(in_flight)),
        };

        let model_field = self.registry().model_name_of(field).to_string();
        let ui_field = self.registry().ui_name_of(&model_field).to_string();
        let context = self.model_context(session);
        let key = GenerationCache::key(&model_field, &context);

        if let Some(value) = self.cache.get(&key) {
            tracing::debug!(field = %model_field, "cache hit, endpoint not contacted");
            session.set(ui_field.clone(), value.clone());
            return Ok(FieldOutcome::Generated {
                field: ui_field,
                value,
                warnings: Vec::new(),
                from_cache: true,
            });
        }

        let (value, warnings) = self.request_field(&model_field, &context).await?;
        session.set(ui_field.clone(), value.clone());
        self.cache.insert(key, value.clone());
        Ok(FieldOutcome::Generated {
            field: ui_field,
            value,
            warnings,
            from_cache: false,
        })
    }

    /// Regenerate a whole table. The cache is never read, only refreshed.
    pub async fn generate_array(
        &self,
        session: &ProjectSession,
        table_field: &str,
    ) -> ScribeResult<FieldOutcome> {
        if !self.registry().is_table_field(table_field) {
            return Ok(FieldOutcome::Skipped(Notice::NotATableField {
                field: table_field.to_string(),
            }));
        }
        let _flight = match self.flight.try_begin(table_field) {
            Ok(guard) => guard,
            Err(in_flight) => return Ok(in_progress(in_flight)),
        };

        let model_field = self.registry().model_name_of(table_field).to_string();
        let ui_field = self.registry().ui_name_of(&model_field).to_string();
        let context = self.model_context(session);
        let key = GenerationCache::key(&model_field, &context);

        let (value, warnings) = self.request_field(&model_field, &context).await?;
        session.set(ui_field.clone(), value.clone());
        self.cache.insert(key, value.clone());
        Ok(FieldOutcome::Generated {
            field: ui_field,
            value,
            warnings,
            from_cache: false,
        })
    }

    /// Generate every still-empty field of `fields` in one batched request.
    pub async fn generate_multiple_fields(
        &self,
        session: &ProjectSession,
        fields: &[&str],
    ) -> ScribeResult<BatchOutcome> {
        let label = fields.join(", ");
        let _flight = match self.flight.try_begin(&label) {
            Ok(guard) => guard,
            Err(in_flight) => {
                return Ok(BatchOutcome::Skipped(Notice::GenerationInProgress { in_flight }))
            }
        };

        let registry = self.registry();
        let mut pending: Vec<String> = Vec::new();
        for field in fields {
            let ui_field = registry.ui_name_of(registry.model_name_of(field)).to_string();
            if !session.is_filled(&ui_field) && !pending.contains(&ui_field) {
                pending.push(ui_field);
            }
        }
        if pending.is_empty() {
            return Ok(BatchOutcome::Skipped(Notice::NothingToGenerate));
        }

        let deferred = if pending.len() > self.max_batch_fields {
            pending.split_off(self.max_batch_fields)
        } else {
            Vec::new()
        };
        if !deferred.is_empty() {
            tracing::info!(deferred = ?deferred, "batch capped at {} fields", self.max_batch_fields);
        }

        let strategy = self.strategy();
        let context = self.model_context(session);
        let built = self.builder.build(&self.batch_target, &context, strategy);
        let request = GenerateMultipleRequest {
            fields: pending
                .iter()
                .map(|f| registry.model_name_of(f).to_string())
                .collect(),
            context: built.text,
            strategy,
        };
        tracing::info!(
            fields = ?request.fields,
            strategy = %strategy,
            context_fields = built.fragments.len(),
            "requesting batched generation"
        );

        let response = self.endpoint.generate_multiple(&request).await.inspect_err(|e| {
            tracing::warn!(error = %e, "batched generation failed");
        })?;

        let mut results: BTreeMap<String, FieldValue> = response
            .results
            .into_iter()
            .map(|(name, value)| (registry.ui_name_of(registry.model_name_of(&name)).to_string(), value))
            .collect();
        let mut errors: BTreeMap<String, String> = response
            .errors
            .unwrap_or_default()
            .into_iter()
            .map(|(name, reason)| (registry.ui_name_of(registry.model_name_of(&name)).to_string(), reason))
            .collect();

        let mut report = BatchReport {
            deferred,
            ..BatchReport::default()
        };
        for ui_field in pending {
            match results.remove(&ui_field) {
                Some(value) if !value.is_empty() => {
                    let value = self.normalizer.prepare(registry, &ui_field, value);
                    session.set(ui_field.clone(), value);
                    // Batch values are uncached; drop any older single-field entry.
                    self.cache.invalidate_field(registry.model_name_of(&ui_field));
                    report.written.push(ui_field);
                }
                Some(_) => {
                    report.failed.insert(ui_field, "valeur vide".to_string());
                }
                None => {
                    let reason = errors
                        .remove(&ui_field)
                        .unwrap_or_else(|| "absent de la réponse".to_string());
                    report.failed.insert(ui_field, reason);
                }
            }
        }
        if !results.is_empty() {
            tracing::warn!(ignored = ?results.keys().collect::<Vec<_>>(), "unrequested fields in batch response");
        }
        tracing::info!(
            written = report.written.len(),
            failed = report.failed.len(),
            "batched generation done"
        );
        Ok(BatchOutcome::Completed(report))
    }

    /// Forward a liveness probe to the endpoint.
    pub async fn health_check(&self) -> ScribeResult<HealthStatus> {
        let status = self.endpoint.health().await?;
        tracing::debug!(status = %status.status, "endpoint health");
        Ok(status)
    }

    fn model_context(&self, session: &ProjectSession) -> ModelContext {
        collect(self.registry(), &session.snapshot())
    }

    /// Build, send and validate one single-field request. Does not touch the session.
    async fn request_field(
        &self,
        model_field: &str,
        context: &ModelContext,
    ) -> ScribeResult<(FieldValue, Vec<String>)> {
        let strategy = self.strategy();
        let built = self.builder.build(model_field, context, strategy);
        let request = GenerateRequest {
            field: model_field.to_string(),
            context: built.text,
            strategy,
        };
        tracing::info!(
            field = %model_field,
            strategy = %strategy,
            context_fields = built.fragments.len(),
            "requesting generation"
        );

        let response = self.endpoint.generate(&request).await.inspect_err(|e| {
            tracing::warn!(field = %model_field, error = %e, "generation failed");
        })?;
        let (value, warnings) = accept(model_field, response)?;
        let value = self.normalizer.prepare(self.registry(), model_field, value);

        if !warnings.is_empty() {
            tracing::info!(field = %model_field, warnings = warnings.len(), "generation returned warnings");
        }
        tracing::info!(field = %model_field, "generation succeeded");
        Ok((value, warnings))
    }
}

impl<E> std::fmt::Debug for GenerationOrchestrator<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationOrchestrator")
            .field("cache", &self.cache)
            .field("batch_target", &self.batch_target)
            .field("max_batch_fields", &self.max_batch_fields)
            .field("in_flight", &self.flight.current())
            .finish_non_exhaustive()
    }
}

fn in_progress(in_flight: String) -> FieldOutcome {
    tracing::debug!(in_flight = %in_flight, "generation already in flight");
    FieldOutcome::Skipped(Notice::GenerationInProgress { in_flight })
}

/// Turn a well-formed response into a value, or the reason it is unusable.
fn accept(field: &str, response: GenerateResponse) -> ScribeResult<(FieldValue, Vec<String>)> {
    if !response.success {
        let message = response
            .message
            .unwrap_or_else(|| "réponse sans succès".to_string());
        return Err(GenerationError::Declined {
            field: field.to_string(),
            message,
        }
        .into());
    }
    let warnings = response.warnings().to_vec();
    match response.value {
        Some(value) if !value.is_empty() => Ok((value, warnings)),
        _ => Err(GenerationError::EmptyValue {
            field: field.to_string(),
        }
        .into()),
    }
}
