//! Results of orchestrated generations.

use std::collections::BTreeMap;

use scribe_core::models::{FieldValue, Notice};

/// Outcome of a single-field or table generation.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldOutcome {
    /// A value was written into the session.
    Generated {
        /// UI vocabulary.
        field: String,
        value: FieldValue,
        /// Validation warnings reported by the endpoint.
        warnings: Vec<String>,
        from_cache: bool,
    },
    /// A local precondition stopped the request before it was sent.
    Skipped(Notice),
}

impl FieldOutcome {
    pub fn value(&self) -> Option<&FieldValue> {
        match self {
            Self::Generated { value, .. } => Some(value),
            Self::Skipped(_) => None,
        }
    }

    pub fn notice(&self) -> Option<&Notice> {
        match self {
            Self::Skipped(notice) => Some(notice),
            Self::Generated { .. } => None,
        }
    }

    pub fn is_from_cache(&self) -> bool {
        matches!(self, Self::Generated { from_cache: true, .. })
    }
}

/// What happened to each field of a batched generation. UI vocabulary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    pub written: Vec<String>,
    /// Field → reason, for fields the endpoint could not produce.
    pub failed: BTreeMap<String, String>,
    /// Fields beyond the batch cap, not sent.
    pub deferred: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BatchOutcome {
    Completed(BatchReport),
    Skipped(Notice),
}

impl BatchOutcome {
    pub fn report(&self) -> Option<&BatchReport> {
        match self {
            Self::Completed(report) => Some(report),
            Self::Skipped(_) => None,
        }
    }

    pub fn notice(&self) -> Option<&Notice> {
        match self {
            Self::Skipped(notice) => Some(notice),
            Self::Completed(_) => None,
        }
    }
}
