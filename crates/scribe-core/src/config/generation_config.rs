use serde::{Deserialize, Serialize};

use super::defaults;

/// Generation orchestration settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Strategy name used until the UI picks another one. Aliases accepted.
    pub default_strategy: String,
    /// Target whose context is built for batched generation.
    pub batch_context_target: String,
    /// Most fields sent in one batched request.
    pub max_batch_fields: usize,
    /// Seed for exploration draws. Unset means entropy-seeded.
    pub exploration_seed: Option<u64>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            default_strategy: defaults::DEFAULT_STRATEGY.to_string(),
            batch_context_target: defaults::DEFAULT_BATCH_CONTEXT_TARGET.to_string(),
            max_batch_fields: defaults::DEFAULT_MAX_BATCH_FIELDS,
            exploration_seed: None,
        }
    }
}
