//! # scribe-feedback
//!
//! Collects user ratings and corrections of generated content. Corrections
//! are applied to the session and evict the field's cached generations
//! before being forwarded; ratings feed local per-field statistics.

pub mod engine;
pub mod outcome;
pub mod stats;

pub use engine::FeedbackLoop;
pub use outcome::FeedbackOutcome;
pub use stats::{FeedbackStats, FeedbackSummary, FieldInsights, QualityStatus};
