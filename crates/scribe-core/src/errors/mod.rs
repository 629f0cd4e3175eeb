//! Error handling for Scribe.
//! One error enum per subsystem, `thiserror` only, aggregated into `ScribeError`.

pub mod config_error;
pub mod error_code;
pub mod feedback_error;
pub mod generation_error;
pub mod registry_error;
pub mod scribe_error;
pub mod transport_error;

pub use config_error::ConfigError;
pub use error_code::ScribeErrorCode;
pub use feedback_error::FeedbackError;
pub use generation_error::GenerationError;
pub use registry_error::RegistryError;
pub use scribe_error::{ScribeError, ScribeResult};
pub use transport_error::TransportError;
