//! Context strategies: how much surrounding context a generation gets.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Token-budget/quality tradeoff for context assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Two relevant fields, no exploration.
    Minimal,
    /// Three relevant fields plus one exploration field.
    #[default]
    #[serde(alias = "smart", alias = "medium")]
    Related,
    /// Two relevant fields plus three to five exploration fields.
    #[serde(alias = "debug")]
    Full,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown strategy: {0}")]
pub struct UnknownStrategy(pub String);

impl Strategy {
    /// Resolve an API-level name, aliases included.
    pub fn from_alias(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "minimal" => Some(Self::Minimal),
            "related" | "smart" | "medium" => Some(Self::Related),
            "full" | "debug" => Some(Self::Full),
            _ => None,
        }
    }

    /// Lenient resolution: unknown names fall back to the default strategy.
    pub fn resolve(name: &str) -> Self {
        Self::from_alias(name).unwrap_or_else(|| {
            tracing::debug!(strategy = name, "unknown strategy, using default");
            Self::default()
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Related => "related",
            Self::Full => "full",
        }
    }

    /// How many entries of the relevance list are attempted.
    pub fn relevance_prefix(self) -> usize {
        match self {
            Self::Minimal => 2,
            Self::Related => 3,
            Self::Full => 2,
        }
    }

    /// Inclusive bounds on the number of exploration fields, if any.
    pub fn exploration_range(self) -> Option<RangeInclusive<usize>> {
        match self {
            Self::Minimal => None,
            Self::Related => Some(1..=1),
            Self::Full => Some(3..=5),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_alias(s).ok_or_else(|| UnknownStrategy(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_resolve_before_use() {
        assert_eq!(Strategy::from_alias("smart"), Some(Strategy::Related));
        assert_eq!(Strategy::from_alias("debug"), Some(Strategy::Full));
        assert_eq!(Strategy::from_alias("MINIMAL"), Some(Strategy::Minimal));
        assert_eq!(Strategy::resolve("bogus"), Strategy::Related);
        assert!("bogus".parse::<Strategy>().is_err());
    }

    #[test]
    fn serializes_canonical_names() {
        assert_eq!(serde_json::to_string(&Strategy::Full).unwrap(), r#""full""#);
        let s: Strategy = serde_json::from_str(r#""smart""#).unwrap();
        assert_eq!(s, Strategy::Related);
    }
}
