//! # Handshake-Guard Telemetry
//!
//! Structured logging bootstrap shared by the Handshake-Guard subsystems.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hg_telemetry::{init_logging, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env();
//! let _guard = init_logging(&config).expect("Failed to init logging");
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `HG_SERVICE_NAME` | `handshake-guard` | Service name in log lines |
//! | `HG_LOG_LEVEL` | `RUST_LOG`, then `info` | Log level filter |
//! | `HG_CONSOLE_OUTPUT` | `true` | Write to stdout |
//! | `HG_JSON_LOGS` | `false` | JSON instead of pretty output |

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::{init_logging, TelemetryGuard};

#[doc(hidden)]
pub use tracing;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TelemetryError {
    /// The log level is not a valid filter directive
    #[error("Invalid log filter: {0}")]
    InvalidFilter(String),

    /// A global subscriber could not be installed
    #[error("Failed to install subscriber: {0}")]
    SubscriberInit(String),
}

/// Create an info span with subsystem context.
///
/// ```rust
/// let _span = hg_telemetry::subsystem_span!("compute_digest", subsystem = "handshake-digest").entered();
/// ```
#[macro_export]
macro_rules! subsystem_span {
    ($name:expr, $($field:tt)*) => {
        $crate::tracing::info_span!($name, $($field)*)
    };
}
