//! Development-time helpers.

pub mod logging;
pub use logging::{LoggingError, install_tracing, set_log_level};
