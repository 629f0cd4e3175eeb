//! Strategy-driven context builder.
//!
//! Assembles the context text for one target field in the precedence order
//! the model was fine-tuned on: base fields, then a prefix of the target's
//! relevance list, then exploration picks from the generation order.
//! Everything except the exploration draw is deterministic.

pub mod render;
pub mod selector;

use std::collections::HashSet;
use std::sync::Arc;

use scribe_core::models::{ModelContext, Strategy};

use crate::prompt::training_prompt;
use crate::registry::FieldRegistry;

pub use render::render_fragment;
pub use selector::{ExplorationSelector, OrderedSelector, RandomSelector};

/// Which inclusion step produced a fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentSource {
    Base,
    Relevance,
    Exploration,
}

/// One field's rendered contribution to the context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextFragment {
    /// Model vocabulary.
    pub field: String,
    pub text: String,
    pub source: FragmentSource,
}

/// Result of one build.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltContext {
    /// Target field, model vocabulary.
    pub task: String,
    pub strategy: Strategy,
    pub fragments: Vec<ContextFragment>,
    /// Fragments joined with `\n`.
    pub text: String,
}

impl BuiltContext {
    /// Included fields in inclusion order, model vocabulary.
    pub fn used_fields(&self) -> Vec<&str> {
        self.fragments.iter().map(|f| f.field.as_str()).collect()
    }

    pub fn fields_from(&self, source: FragmentSource) -> Vec<&str> {
        self.fragments
            .iter()
            .filter(|f| f.source == source)
            .map(|f| f.field.as_str())
            .collect()
    }

    /// Full `[INST]` prompt for this context.
    pub fn prompt(&self) -> String {
        training_prompt(&self.task, &self.text)
    }
}

/// Builds contexts against a registry, with a pluggable exploration draw.
#[derive(Clone)]
pub struct ContextBuilder {
    registry: Arc<FieldRegistry>,
    selector: Arc<dyn ExplorationSelector>,
}

impl std::fmt::Debug for ContextBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContextBuilder").finish_non_exhaustive()
    }
}

impl ContextBuilder {
    /// Builder with a uniformly random exploration draw.
    pub fn new(registry: Arc<FieldRegistry>) -> Self {
        Self::with_selector(registry, Arc::new(RandomSelector::from_entropy()))
    }

    /// Random draw, seeded when `seed` is set.
    pub fn with_seed(registry: Arc<FieldRegistry>, seed: Option<u64>) -> Self {
        Self::with_selector(registry, Arc::new(RandomSelector::from_seed(seed)))
    }

    pub fn with_selector(
        registry: Arc<FieldRegistry>,
        selector: Arc<dyn ExplorationSelector>,
    ) -> Self {
        Self { registry, selector }
    }

    pub fn registry(&self) -> &FieldRegistry {
        &self.registry
    }

    /// Build the context for `target` (either vocabulary).
    pub fn build(&self, target: &str, context: &ModelContext, strategy: Strategy) -> BuiltContext {
        let task = self.registry.model_name_of(target).to_string();
        if !self.registry.is_known(&task) {
            tracing::warn!(target_field = %task, "unknown target field, using base fields and exploration only");
        }
        let relevant = self.registry.relevant_fields_for(&task);

        let mut fragments: Vec<ContextFragment> = Vec::new();
        let mut used: HashSet<&str> = HashSet::new();

        for &name in self.registry.base_fields() {
            if used.contains(name) {
                continue;
            }
            if let Some(text) = context.get(name).and_then(|v| render_fragment(name, v)) {
                used.insert(name);
                fragments.push(fragment(name, text, FragmentSource::Base));
            }
        }

        for &name in relevant.iter().take(strategy.relevance_prefix()) {
            if name == task || used.contains(name) {
                continue;
            }
            if let Some(text) = context.get(name).and_then(|v| render_fragment(name, v)) {
                used.insert(name);
                fragments.push(fragment(name, text, FragmentSource::Relevance));
            }
        }

        if let Some(count) = strategy.exploration_range() {
            let pool: Vec<(&str, String)> = self
                .registry
                .generation_order()
                .iter()
                .copied()
                .filter(|&name| name != task && !relevant.contains(&name) && !used.contains(name))
                .filter_map(|name| {
                    context
                        .get(name)
                        .and_then(|v| render_fragment(name, v))
                        .map(|text| (name, text))
                })
                .collect();

            if pool.is_empty() {
                tracing::debug!(task = %task, "exploration pool empty, skipping");
            } else {
                let names: Vec<&str> = pool.iter().map(|(name, _)| *name).collect();
                let mut picked: HashSet<usize> = HashSet::new();
                for index in self.selector.select(&names, count) {
                    if index >= pool.len() || !picked.insert(index) {
                        continue;
                    }
                    let (name, text) = &pool[index];
                    fragments.push(fragment(name, text.clone(), FragmentSource::Exploration));
                }
            }
        }

        let text = fragments
            .iter()
            .map(|f| f.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        let built = BuiltContext {
            task,
            strategy,
            fragments,
            text,
        };
        tracing::debug!(
            task = %built.task,
            strategy = %strategy,
            base = built.fields_from(FragmentSource::Base).len(),
            relevance = built.fields_from(FragmentSource::Relevance).len(),
            exploration = built.fields_from(FragmentSource::Exploration).len(),
            "context built"
        );
        built
    }
}

fn fragment(field: &str, text: String, source: FragmentSource) -> ContextFragment {
    ContextFragment {
        field: field.to_string(),
        text,
        source,
    }
}
