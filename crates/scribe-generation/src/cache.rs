//! Advisory cache of generated values.
//!
//! Uses `moka::sync::Cache` with a fixed TTL checked on read. Keys are
//! `"{field}:{fingerprint}"`, where the fingerprint hashes the project's
//! identity fields, so a correction can evict every entry for a field by
//! prefix. Tracks hits/misses. Cheap to clone; clones share entries.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache;
use scribe_core::config::CacheConfig;
use scribe_core::models::{FieldValue, ModelContext};

/// Model-vocabulary fields that identify "the same project" for caching.
pub const IDENTITY_FIELDS: &[&str] = &["client", "typeProjet", "complexite"];

#[derive(Clone)]
pub struct GenerationCache {
    cache: Option<Cache<String, FieldValue>>,
    hits: Arc<AtomicU64>,
    misses: Arc<AtomicU64>,
}

impl std::fmt::Debug for GenerationCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationCache")
            .field("enabled", &self.is_enabled())
            .field("hits", &self.hits())
            .field("misses", &self.misses())
            .finish()
    }
}

impl GenerationCache {
    pub fn new(ttl: Duration, max_entries: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_live(ttl)
            .build();
        Self {
            cache: Some(cache),
            hits: Arc::new(AtomicU64::new(0)),
            misses: Arc::new(AtomicU64::new(0)),
        }
    }

    /// A cache that never stores anything.
    pub fn disabled() -> Self {
        Self {
            cache: None,
            hits: Arc::new(AtomicU64::new(0)),
            misses: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn from_config(config: &CacheConfig) -> Self {
        if config.enabled {
            Self::new(Duration::from_secs(config.ttl_secs), config.max_entries)
        } else {
            Self::disabled()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.cache.is_some()
    }

    /// Cache key for `field` (model vocabulary) within the project `context`.
    pub fn key(field: &str, context: &ModelContext) -> String {
        format!("{field}:{}", fingerprint(context))
    }

    pub fn get(&self, key: &str) -> Option<FieldValue> {
        let cache = self.cache.as_ref()?;
        match cache.get(key) {
            Some(v) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(v)
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    pub fn insert(&self, key: String, value: FieldValue) {
        if let Some(cache) = &self.cache {
            cache.insert(key, value);
        }
    }

    /// Evict every entry for `field`, whatever the project identity.
    pub fn invalidate_field(&self, field: &str) {
        let Some(cache) = &self.cache else {
            return;
        };
        let prefix = format!("{field}:");
        cache.run_pending_tasks();
        let keys: Vec<String> = cache
            .iter()
            .filter(|(k, _)| k.starts_with(&prefix))
            .map(|(k, _)| k.as_ref().clone())
            .collect();
        let evicted = keys.len();
        for key in keys {
            cache.invalidate(&key);
        }
        tracing::debug!(field, evicted, "cache entries invalidated");
    }

    pub fn invalidate_all(&self) {
        if let Some(cache) = &self.cache {
            cache.invalidate_all();
        }
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    /// Cache hit rate (0.0–1.0).
    pub fn hit_rate(&self) -> f64 {
        let h = self.hits() as f64;
        let total = h + self.misses() as f64;
        if total == 0.0 {
            0.0
        } else {
            h / total
        }
    }

    pub fn entry_count(&self) -> u64 {
        self.cache.as_ref().map_or(0, |c| {
            c.run_pending_tasks();
            c.entry_count()
        })
    }
}

impl Default for GenerationCache {
    fn default() -> Self {
        Self::from_config(&CacheConfig::default())
    }
}

/// Hash of the identity fields, stable across processes.
fn fingerprint(context: &ModelContext) -> String {
    let mut hasher = blake3::Hasher::new();
    for name in IDENTITY_FIELDS {
        hasher.update(name.as_bytes());
        hasher.update(b"=");
        if let Some(value) = context.get(name) {
            hasher.update(value.to_string().as_bytes());
        }
        hasher.update(b"\n");
    }
    hasher.finalize().to_hex().as_str()[..16].to_string()
}
