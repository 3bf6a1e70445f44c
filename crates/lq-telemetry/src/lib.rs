//! # LQ Telemetry
//!
//! Structured logging for Linked-Queue tools, built on `tracing` and
//! `tracing-subscriber`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lq_telemetry::{init_logging, TelemetryConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = TelemetryConfig::from_env();
//!     init_logging(&config)?;
//!     // Events from lq-queue and the shell are now formatted on stderr
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `LQ_LOG_LEVEL` / `RUST_LOG` | `info` | Level filter or `EnvFilter` directive |
//! | `LQ_JSON_LOGS` | `false` | JSON lines instead of text |
//! | `LQ_CONSOLE_OUTPUT` | `true` | Disable to silence all logs |
//! | `LQ_SERVICE_NAME` | `linked-queue` | Service name in the init event |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::{build_filter, init_logging};

// Used by `log_event!` so callers need no direct `tracing` dependency
#[doc(hidden)]
pub use tracing;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid log filter '{directive}': {reason}")]
    InvalidFilter { directive: String, reason: String },

    #[error("Failed to install tracing subscriber: {0}")]
    SubscriberInit(String),
}
