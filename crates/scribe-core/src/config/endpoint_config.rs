use serde::{Deserialize, Serialize};

use super::defaults;

/// Generation endpoint connection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Base URL of the inference service.
    pub base_url: String,
    /// Client-side request timeout. Unset means the transport's own failure
    /// is the only bound.
    pub timeout_secs: Option<u64>,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::DEFAULT_ENDPOINT_URL.to_string(),
            timeout_secs: None,
        }
    }
}
