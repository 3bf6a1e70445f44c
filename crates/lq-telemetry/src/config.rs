//! Telemetry configuration from environment variables.

use std::env;

/// Configuration for log output.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Service name attached to every log line
    pub service_name: String,

    /// Log level filter (trace, debug, info, warn, error) or a full
    /// `EnvFilter` directive such as `lq_queue=debug,info`
    pub log_level: String,

    /// Whether to write logs at all
    pub console_output: bool,

    /// Whether to emit JSON instead of human-readable lines
    pub json_logs: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "linked-queue".to_string(),
            log_level: "info".to_string(),
            console_output: true,
            json_logs: false,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `LQ_SERVICE_NAME`: Service name (default: linked-queue)
    /// - `LQ_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `LQ_CONSOLE_OUTPUT`: Enable log output (default: true)
    /// - `LQ_JSON_LOGS`: Enable JSON logs (default: false)
    pub fn from_env() -> Self {
        Self {
            service_name: env::var("LQ_SERVICE_NAME")
                .unwrap_or_else(|_| "linked-queue".to_string()),

            log_level: env::var("LQ_LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or_else(|_| "info".to_string()),

            console_output: env::var("LQ_CONSOLE_OUTPUT")
                .map(|v| !is_falsy(&v))
                .unwrap_or(true),

            json_logs: env::var("LQ_JSON_LOGS")
                .map(|v| is_truthy(&v))
                .unwrap_or(false),
        }
    }

    /// Override the level filter
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Override JSON output
    pub fn with_json_logs(mut self, json: bool) -> Self {
        self.json_logs = json;
        self
    }
}

fn is_truthy(value: &str) -> bool {
    value.eq_ignore_ascii_case("true") || value == "1"
}

fn is_falsy(value: &str) -> bool {
    value.eq_ignore_ascii_case("false") || value == "0"
}
