//! Top-level Scribe configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{defaults, CacheConfig, EndpointConfig, GenerationConfig, ObservabilityConfig, TableConfig};
use crate::errors::ConfigError;
use crate::models::Strategy;

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "scribe.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`SCRIBE_*`)
/// 2. Project config (`scribe.toml` in the project root)
/// 3. User config (`~/.scribe/config.toml`)
/// 4. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScribeConfig {
    pub endpoint: EndpointConfig,
    pub generation: GenerationConfig,
    pub cache: CacheConfig,
    pub tables: TableConfig,
    pub observability: ObservabilityConfig,
}

impl ScribeConfig {
    /// Load configuration with layered resolution.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        Self::load_with_user_config(root, user_config_path().as_deref())
    }

    /// Same as [`ScribeConfig::load`] with an explicit user config location.
    pub fn load_with_user_config(
        root: &Path,
        user_config: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        let mut merged = toml::Value::Table(toml::map::Map::new());

        // Layer 3 (lowest file priority): user config
        if let Some(path) = user_config.filter(|p| p.exists()) {
            merge_values(&mut merged, read_toml(path)?);
        }

        // Layer 2: project config
        let project_path = root.join(PROJECT_CONFIG_FILE);
        if project_path.exists() {
            merge_values(&mut merged, read_toml(&project_path)?);
        }

        let mut config: ScribeConfig =
            merged.try_into().map_err(|e: toml::de::Error| ConfigError::ParseError {
                path: root.display().to_string(),
                message: e.to_string(),
            })?;

        // Layer 1 (highest priority): environment
        config.apply_env_overrides();

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: ScribeConfig = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// The configured default strategy, aliases resolved.
    pub fn default_strategy(&self) -> Strategy {
        Strategy::resolve(&self.generation.default_strategy)
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.base_url.trim().is_empty() {
            return Err(invalid("endpoint.base_url", "must not be empty"));
        }
        if self.endpoint.timeout_secs == Some(0) {
            return Err(invalid("endpoint.timeout_secs", "must be greater than 0"));
        }
        if Strategy::from_alias(&self.generation.default_strategy).is_none() {
            return Err(invalid(
                "generation.default_strategy",
                "must be one of minimal, related, full (or smart, debug)",
            ));
        }
        if self.generation.batch_context_target.trim().is_empty() {
            return Err(invalid("generation.batch_context_target", "must not be empty"));
        }
        if self.generation.max_batch_fields == 0 {
            return Err(invalid("generation.max_batch_fields", "must be greater than 0"));
        }
        if self.cache.enabled && self.cache.ttl_secs == 0 {
            return Err(invalid("cache.ttl_secs", "must be greater than 0"));
        }
        if !(1..=defaults::MAX_DATE_SPACING_DAYS).contains(&self.tables.date_spacing_days) {
            return Err(invalid(
                "tables.date_spacing_days",
                "must be between 1 and 3650",
            ));
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Unparsable values are ignored, the lower layer stays in effect.
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("SCRIBE_ENDPOINT_URL") {
            self.endpoint.base_url = val;
        }
        if let Ok(val) = std::env::var("SCRIBE_ENDPOINT_TIMEOUT_SECS") {
            if let Ok(v) = val.parse::<u64>() {
                self.endpoint.timeout_secs = Some(v);
            }
        }
        if let Ok(val) = std::env::var("SCRIBE_STRATEGY") {
            self.generation.default_strategy = val;
        }
        if let Ok(val) = std::env::var("SCRIBE_EXPLORATION_SEED") {
            if let Ok(v) = val.parse::<u64>() {
                self.generation.exploration_seed = Some(v);
            }
        }
        if let Ok(val) = std::env::var("SCRIBE_CACHE_TTL_SECS") {
            if let Ok(v) = val.parse::<u64>() {
                self.cache.ttl_secs = v;
            }
        }
        if let Ok(val) = std::env::var("SCRIBE_CACHE_ENABLED") {
            if let Ok(v) = val.parse::<bool>() {
                self.cache.enabled = v;
            }
        }
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}

fn read_toml(path: &Path) -> Result<toml::Value, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.display().to_string(),
    })?;
    toml::from_str(&content).map_err(|e| ConfigError::ParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Deep-merge `overlay` into `base`. Tables merge key by key, anything else
/// is replaced. Unknown keys survive and are ignored at deserialization.
fn merge_values(base: &mut toml::Value, overlay: toml::Value) {
    match (base, overlay) {
        (toml::Value::Table(base_table), toml::Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}

/// Returns the user config path: `~/.scribe/config.toml`.
fn user_config_path() -> Option<PathBuf> {
    home_dir().map(|h| h.join(".scribe").join("config.toml"))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_keeps_keys_missing_from_overlay() {
        let mut base: toml::Value = toml::from_str("[cache]\nttl_secs = 60\nmax_entries = 10").unwrap();
        let overlay: toml::Value = toml::from_str("[cache]\nttl_secs = 120").unwrap();
        merge_values(&mut base, overlay);
        assert_eq!(base["cache"]["ttl_secs"].as_integer(), Some(120));
        assert_eq!(base["cache"]["max_entries"].as_integer(), Some(10));
    }
}
