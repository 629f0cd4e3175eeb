//! Context Collector: turns UI-side project state into a model-vocabulary
//! snapshot the builder can read.

use scribe_core::models::{ModelContext, ProjectState};

use crate::registry::FieldRegistry;

/// Snapshot `state` in model vocabulary.
///
/// Empty strings and empty tables are dropped, numbers are always kept.
/// When two UI names map to the same model name, the later one in
/// iteration order wins.
pub fn collect(registry: &FieldRegistry, state: &ProjectState) -> ModelContext {
    let mut context = ModelContext::new();
    let mut dropped = 0usize;
    for (name, value) in state.iter() {
        if value.is_empty() {
            dropped += 1;
            continue;
        }
        context.insert(registry.model_name_of(name), value.clone());
    }
    tracing::debug!(kept = context.len(), dropped, "collected model context");
    context
}
