//! Configuration system for Scribe.
//! TOML-based, layered resolution: env > project > user > defaults.

pub mod cache_config;
pub mod defaults;
pub mod endpoint_config;
pub mod generation_config;
pub mod observability_config;
pub mod scribe_config;
pub mod table_config;

pub use cache_config::CacheConfig;
pub use endpoint_config::EndpointConfig;
pub use generation_config::GenerationConfig;
pub use observability_config::ObservabilityConfig;
pub use scribe_config::ScribeConfig;
pub use table_config::TableConfig;
