//! # scribe-generation
//!
//! Orchestrates generation requests against the fine-tuned model: global
//! single-flight, the advisory result cache, table parsing and
//! normalization, and the HTTP transport to the inference service.

pub mod cache;
pub mod normalize;
pub mod orchestrator;
pub mod parse;
pub mod transport;

pub use cache::GenerationCache;
pub use normalize::TableNormalizer;
pub use orchestrator::{BatchOutcome, BatchReport, FieldOutcome, GenerationOrchestrator, SharedStrategy};
pub use parse::parse_table;
pub use transport::HttpEndpoint;
