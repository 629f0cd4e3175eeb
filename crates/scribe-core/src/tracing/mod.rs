//! Tracing/logging setup.

pub mod setup;

pub use setup::{init_tracing, init_tracing_from_config, init_tracing_with_filter, is_installed};
