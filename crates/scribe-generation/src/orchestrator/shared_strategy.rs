//! Current generation strategy, shared between the orchestrator and the
//! feedback loop so both build the same context.

use std::sync::{Arc, PoisonError, RwLock};

use scribe_core::models::Strategy;

#[derive(Debug, Clone, Default)]
pub struct SharedStrategy(Arc<RwLock<Strategy>>);

impl SharedStrategy {
    pub fn new(strategy: Strategy) -> Self {
        Self(Arc::new(RwLock::new(strategy)))
    }

    pub fn get(&self) -> Strategy {
        *self.0.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set(&self, strategy: Strategy) {
        *self.0.write().unwrap_or_else(PoisonError::into_inner) = strategy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_see_updates() {
        let shared = SharedStrategy::new(Strategy::Related);
        let clone = shared.clone();
        shared.set(Strategy::Full);
        assert_eq!(clone.get(), Strategy::Full);
    }
}
