// Single source of truth for all default values.

// --- Endpoint ---
pub const DEFAULT_ENDPOINT_URL: &str = "http://localhost:5000";

// --- Generation ---
pub const DEFAULT_STRATEGY: &str = "related";
pub const DEFAULT_BATCH_CONTEXT_TARGET: &str = "contexte_proj";
pub const DEFAULT_MAX_BATCH_FIELDS: usize = 5;

// --- Cache ---
pub const DEFAULT_CACHE_ENABLED: bool = true;
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300; // 5 minutes
pub const DEFAULT_CACHE_MAX_ENTRIES: u64 = 1_000;

// --- Tables ---
pub const DEFAULT_DATE_SPACING_DAYS: i64 = 30;
pub const MAX_DATE_SPACING_DAYS: i64 = 3_650; // 10 years

// --- Observability ---
pub const DEFAULT_LOG_FILTER: &str = "scribe=info";
