//! Observability: tracing init.
//!
//! Uses config::ObservabilityConfig for SKILLPACK_QUIET, SKILLPACK_LOG_LEVEL and
//! SKILLPACK_LOG_JSON. Logs go to stderr; stdout is reserved for the run report.

use tracing_subscriber::{prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;

/// Initialize tracing. Call at process startup; later calls are no-ops.
pub fn init_tracing() {
    let cfg = ObservabilityConfig::from_env();
    let level = filter_directive(&cfg);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level));

    let _ = if cfg.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(false),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(false),
            )
            .try_init()
    };
}

fn filter_directive(cfg: &ObservabilityConfig) -> String {
    if cfg.quiet {
        "skillpack=warn".to_string()
    } else {
        cfg.log_level.clone()
    }
}
