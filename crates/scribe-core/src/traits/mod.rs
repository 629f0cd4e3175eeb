//! Seams to external collaborators.

pub mod endpoint;
pub mod feedback_sink;

pub use endpoint::GenerationEndpoint;
pub use feedback_sink::FeedbackSink;
