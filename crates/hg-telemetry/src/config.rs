//! Telemetry configuration from environment variables.

use std::env;

use serde::{Deserialize, Serialize};

const DEFAULT_SERVICE_NAME: &str = "handshake-guard";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Configuration for structured logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Service name attached to every log line
    pub service_name: String,

    /// Subsystem identifier ("00" for the whole service)
    pub subsystem_id: String,

    /// Log level filter, in `EnvFilter` directive syntax
    pub log_level: String,

    /// Whether to write log lines to stdout
    pub console_output: bool,

    /// Whether to emit JSON instead of human-readable lines
    pub json_logs: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            subsystem_id: "00".to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
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
    /// - `HG_SERVICE_NAME`: Service name (default: handshake-guard)
    /// - `HG_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `HG_CONSOLE_OUTPUT`: Enable console output (default: true)
    /// - `HG_JSON_LOGS`: Enable JSON logs (default: false)
    pub fn from_env() -> Self {
        Self {
            service_name: env::var("HG_SERVICE_NAME")
                .unwrap_or_else(|_| DEFAULT_SERVICE_NAME.to_string()),
            subsystem_id: "00".to_string(),
            log_level: env::var("HG_LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()),
            console_output: parse_flag(env::var("HG_CONSOLE_OUTPUT").ok(), true),
            json_logs: parse_flag(env::var("HG_JSON_LOGS").ok(), false),
        }
    }

    /// Create configuration for a specific subsystem.
    pub fn for_subsystem(subsystem_id: &str, subsystem_name: &str) -> Self {
        let mut config = Self::from_env();
        config.subsystem_id = subsystem_id.to_string();
        config.service_name = format!("hg-{}-{}", subsystem_id, subsystem_name);
        config
    }

    /// Quiet configuration for tests: warnings only, plain output.
    pub fn for_testing() -> Self {
        Self {
            log_level: "warn".to_string(),
            ..Self::default()
        }
    }

    /// Get the full service name including subsystem.
    pub fn full_service_name(&self) -> String {
        if self.subsystem_id == "00" {
            self.service_name.clone()
        } else {
            format!("{}-{}", self.service_name, self.subsystem_id)
        }
    }
}

/// `"1"`/`"true"`/`"yes"`/`"on"` enable, `"0"`/`"false"`/`"no"`/`"off"`
/// disable; anything else keeps `default`.
fn parse_flag(value: Option<String>, default: bool) -> bool {
    match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        Some("1" | "true" | "yes" | "on") => true,
        Some("0" | "false" | "no" | "off") => false,
        _ => default,
    }
}
