//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the CCR tracing/logging system.
///
/// Reads the `CCR_LOG` environment variable for per-crate log levels.
/// Format: `CCR_LOG=ccr_ranking=debug,ccr_core=warn`
///
/// Falls back to `ccr=info` if `CCR_LOG` is not set or is invalid.
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    init_tracing_with_level(crate::config::defaults::DEFAULT_LOG_LEVEL);
}

/// Like [`init_tracing`], with the fallback level taken from config
/// (`observability.log_level`).
pub fn init_tracing_with_level(level: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("CCR_LOG")
            .unwrap_or_else(|_| EnvFilter::new(format!("ccr={level}")));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
