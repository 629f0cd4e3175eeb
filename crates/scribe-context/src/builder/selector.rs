//! Exploration pick: the only source of randomness in context building.

use std::ops::RangeInclusive;
use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chooses exploration fields from a candidate pool.
///
/// Returns indices into `pool`, in draw order, without repetition. The
/// number drawn should fall in `count`, capped at the pool size.
pub trait ExplorationSelector: Send + Sync {
    fn select(&self, pool: &[&str], count: RangeInclusive<usize>) -> Vec<usize>;
}

/// Uniform draw: count uniform in the range, then indices without replacement.
#[derive(Debug)]
pub struct RandomSelector {
    rng: Mutex<StdRng>,
}

impl RandomSelector {
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Reproducible draws, for debugging a specific prompt.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl Default for RandomSelector {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl ExplorationSelector for RandomSelector {
    fn select(&self, pool: &[&str], count: RangeInclusive<usize>) -> Vec<usize> {
        if pool.is_empty() || count.is_empty() {
            return Vec::new();
        }
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        let wanted = rng.gen_range(count).min(pool.len());
        rand::seq::index::sample(&mut *rng, pool.len(), wanted).into_vec()
    }
}

/// Deterministic selector: takes candidates in pool order.
///
/// Draws the range's upper bound unless a fixed count is given, which is
/// clamped into the range.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderedSelector {
    count: Option<usize>,
}

impl OrderedSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_count(count: usize) -> Self {
        Self { count: Some(count) }
    }
}

impl ExplorationSelector for OrderedSelector {
    fn select(&self, pool: &[&str], count: RangeInclusive<usize>) -> Vec<usize> {
        if count.is_empty() {
            return Vec::new();
        }
        let wanted = self
            .count
            .map_or(*count.end(), |n| n.clamp(*count.start(), *count.end()));
        (0..wanted.min(pool.len())).collect()
    }
}
