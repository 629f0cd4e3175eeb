//! # scribe-core
//!
//! Foundation crate for the Scribe generation core.
//! Defines field values, the project session, strategies, the wire protocol,
//! errors, config, constants, collaborator traits and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::ScribeConfig;
pub use errors::{ScribeError, ScribeResult};
pub use models::{FieldValue, ModelContext, Notice, ProjectSession, ProjectState, Strategy, TableRow};
