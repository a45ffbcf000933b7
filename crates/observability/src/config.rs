//! Configuration for tracing output.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Service name recorded at startup (e.g. "casetrace-cli").
    pub service_name: String,

    /// Log level filter (e.g. "info", "casetrace_client=debug"). When unset,
    /// the filter falls back to `CASETRACE_LOG`/`RUST_LOG`, then "info".
    pub log_level: Option<String>,

    /// Write events to stderr. Off is useful for tests that assert on
    /// process output.
    pub enable_console: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        ObservabilityConfig {
            service_name: "casetrace".to_string(),
            log_level: None,
            enable_console: true,
        }
    }
}

impl ObservabilityConfig {
    pub fn new(service_name: impl Into<String>) -> Self {
        ObservabilityConfig {
            service_name: service_name.into(),
            ..Default::default()
        }
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    pub fn with_console(mut self, enable: bool) -> Self {
        self.enable_console = enable;
        self
    }

    /// Build from environment: `CASETRACE_SERVICE_NAME` for the service name,
    /// `CASETRACE_LOG` or `RUST_LOG` for the filter.
    pub fn from_env() -> Self {
        let service_name =
            std::env::var("CASETRACE_SERVICE_NAME").unwrap_or_else(|_| "casetrace".to_string());
        let log_level = std::env::var("CASETRACE_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .ok();

        ObservabilityConfig {
            service_name,
            log_level,
            enable_console: true,
        }
    }
}
