//! Diagnostic logging.
//!
//! The library emits `tracing` events (file loads and saves, sprite lookups,
//! skipped rows). Nothing is printed unless a subscriber is installed; the
//! binary installs one with [`init_logging`], writing to stderr so that
//! command output on stdout stays clean.
//!
//! Level precedence: the `POKEBOX_LOG` environment variable (any `EnvFilter`
//! directive), then `-v` (debug), then the default of `warn`.

use crate::error::{PokeboxError, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

pub const LOG_ENV: &str = "POKEBOX_LOG";

fn default_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

pub fn build_env_filter(verbose: bool) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        return Ok(filter);
    }

    let directive = format!("pokebox={}", default_level(verbose));
    let filter = EnvFilter::new("warn").add_directive(
        directive
            .parse()
            .map_err(|e| PokeboxError::Store(format!("Invalid log directive: {}", e)))?,
    );
    Ok(filter)
}

/// Installs the stderr subscriber. Calling it twice is harmless.
pub fn init_logging(verbose: bool) -> Result<()> {
    let filter = build_env_filter(verbose)?;
    let _ = Registry::default()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init();
    Ok(())
}
