//! Tracing initialization and configuration.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;

static INIT: Once = Once::new();
static INSTALLED: AtomicBool = AtomicBool::new(false);

/// Initialize the Scribe tracing/logging system with default settings.
///
/// Reads the `SCRIBE_LOG` environment variable for per-crate log levels.
/// Format: `SCRIBE_LOG=scribe_context=debug,scribe_generation=info`
///
/// Falls back to `scribe=info` if `SCRIBE_LOG` is not set or is invalid.
pub fn init_tracing() {
    init_tracing_from_config(&ObservabilityConfig::default());
}

/// Initialize tracing from the observability config. `SCRIBE_LOG` still
/// takes precedence over `log_filter`.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing_from_config(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("SCRIBE_LOG")
            .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

        let layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true);

        let result = if config.json_logs {
            tracing_subscriber::registry()
                .with(layer.json())
                .with(filter)
                .try_init()
        } else {
            tracing_subscriber::registry().with(layer).with(filter).try_init()
        };
        match result {
            Ok(()) => INSTALLED.store(true, Ordering::SeqCst),
            // Reported through the host application's own subscriber.
            Err(e) => tracing::debug!(error = %e, "global subscriber already set, keeping it"),
        }
    });
}

/// Whether the Scribe subscriber is the global one.
pub fn is_installed() -> bool {
    INSTALLED.load(Ordering::SeqCst)
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    init_tracing_from_config(&ObservabilityConfig {
        log_filter: filter.to_string(),
        ..Default::default()
    });
}
