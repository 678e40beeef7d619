//! Tracing subscriber installation.
//!
//! The library crates only emit `tracing` events. Applications that want to
//! see them call [`install_tracing`] once at startup, and may change the
//! filter later with [`set_log_level`].

use std::sync::{Once, OnceLock};

use tracing_subscriber::filter::ParseError;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt, reload};

const DEFAULT_LOG_LEVEL: &str = "info";

static TRACING_INSTALLED: Once = Once::new();
static FILTER_HANDLE: OnceLock<reload::Handle<EnvFilter, Registry>> = OnceLock::new();

/// Errors from [`set_log_level`].
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The filter directive could not be parsed.
    #[error("invalid log filter directive: {0}")]
    InvalidDirective(#[from] ParseError),
    /// [`install_tracing`] has not installed a subscriber.
    #[error("tracing subscriber is not installed")]
    NotInstalled,
    /// The installed subscriber is gone.
    #[error("failed to swap log filter: {0}")]
    Reload(#[from] reload::Error),
}

/// Install the global `fmt` subscriber (idempotent).
///
/// The filter is read from `RUST_LOG` and falls back to `info`. Another
/// subscriber installed first wins; this one then stays silent. Panics are
/// routed through `tracing` as well.
pub fn install_tracing() {
    TRACING_INSTALLED.call_once(|| {
        std::panic::set_hook(Box::new(tracing_panic::panic_hook));

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
        let (filter, handle) = reload::Layer::new(filter);

        let result = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true))
            .try_init();

        match result {
            Ok(()) => {
                let _ = FILTER_HANDLE.set(handle);
            }
            Err(err) => eprintln!("flowkit tracing subscriber failed to initialize: {err}"),
        }
    });
}

/// Replace the active filter with `directives` (same syntax as `RUST_LOG`).
///
/// # Errors
///
/// Fails if the directives do not parse, or if [`install_tracing`] did not
/// install the global subscriber.
pub fn set_log_level(directives: &str) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_new(directives)?;
    let handle = FILTER_HANDLE.get().ok_or(LoggingError::NotInstalled)?;
    handle.reload(filter)?;
    tracing::debug!(directives, "log filter updated");
    Ok(())
}
