//! Data model shared by every Scribe crate.

pub mod field_value;
pub mod notice;
pub mod project;
pub mod strategy;
pub mod wire;

pub use field_value::{format_number, FieldValue, TableRow};
pub use notice::Notice;
pub use project::{ModelContext, ProjectSession, ProjectState};
pub use strategy::{Strategy, UnknownStrategy};
pub use wire::{
    CorrectionInsights, CorrectionRequest, CorrectionResponse, GenerateMultipleRequest,
    GenerateMultipleResponse, GenerateRequest, GenerateResponse, HealthStatus, ModelCapabilities,
    ModelInfo, RatingRequest, RatingResponse, ValidateRequest, ValidateResponse, ValidationReport,
};
