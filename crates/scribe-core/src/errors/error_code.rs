//! ScribeErrorCode trait for the UI boundary.

/// Every error enum implements this to give the UI a stable code and a
/// short message it can display verbatim.
pub trait ScribeErrorCode {
    /// Stable error code string (e.g., "TRANSPORT_ERROR").
    fn error_code(&self) -> &'static str;

    /// Short, human-readable notice for the end user.
    fn user_message(&self) -> String;

    /// Formatted boundary string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants for the UI boundary.
pub const TRANSPORT_ERROR: &str = "TRANSPORT_ERROR";
pub const ENDPOINT_STATUS: &str = "ENDPOINT_STATUS";
pub const DECODE_ERROR: &str = "DECODE_ERROR";
pub const GENERATION_DECLINED: &str = "GENERATION_DECLINED";
pub const EMPTY_GENERATION: &str = "EMPTY_GENERATION";
pub const FEEDBACK_REJECTED: &str = "FEEDBACK_REJECTED";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const REGISTRY_ERROR: &str = "REGISTRY_ERROR";
