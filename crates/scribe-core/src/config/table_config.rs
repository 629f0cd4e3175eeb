use serde::{Deserialize, Serialize};

use super::defaults;

/// Table normalization settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Days between the synthesized default dates of consecutive rows.
    pub date_spacing_days: i64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            date_spacing_days: defaults::DEFAULT_DATE_SPACING_DAYS,
        }
    }
}
