//! Configuration schema definitions.
//!
//! The top-level `main_server` / `limbo_server` keys are the whole of the
//! persisted document in its minimal form; the sections below are optional.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::tracker::BackendNames;

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct LimboConfig {
    /// Backend players are ultimately returned to. Empty disables reconnection.
    pub main_server: String,

    /// Holding backend players are parked on while main is unavailable.
    pub limbo_server: String,

    /// Reconnect scheduler settings.
    pub reconnect: ReconnectConfig,

    /// Logging and metrics settings.
    pub observability: ObservabilityConfig,

    /// Admin API settings.
    pub admin: AdminConfig,
}

impl LimboConfig {
    pub fn backend_names(&self) -> BackendNames {
        BackendNames::new(self.main_server.clone(), self.limbo_server.clone())
    }

    /// True when both backend names are filled in.
    pub fn is_configured(&self) -> bool {
        let names = self.backend_names();
        names.main().is_some() && names.limbo().is_some()
    }
}

/// Reconnect scheduler configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ReconnectConfig {
    /// Seconds between ticks. The first tick fires at startup.
    pub interval_secs: u64,

    /// Seconds before an unanswered connection attempt counts as failed.
    pub attempt_timeout_secs: u64,

    /// Initial state of the global auto-reconnect toggle.
    pub auto_reconnect: bool,

    /// Action bar text shown on every attempt.
    pub status_message: String,

    /// Seconds to wait for in-flight attempts during shutdown.
    pub drain_timeout_secs: u64,
}

impl ReconnectConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    pub fn attempt_timeout(&self) -> Duration {
        Duration::from_secs(self.attempt_timeout_secs)
    }

    pub fn drain_timeout(&self) -> Duration {
        Duration::from_secs(self.drain_timeout_secs)
    }
}

impl Default for ReconnectConfig {
    fn default() -> Self {
        Self {
            interval_secs: 10,
            attempt_timeout_secs: 30,
            auto_reconnect: true,
            status_message: "Attempting reconnection to server...".to_string(),
            drain_timeout_secs: 5,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,

    /// Enable the Prometheus endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9091".to_string(),
        }
    }
}

/// Admin API configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct AdminConfig {
    /// Enable the admin API.
    pub enabled: bool,

    /// Bearer token required on every admin request.
    pub api_key: String,

    /// Admin API bind address.
    pub bind_address: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            api_key: String::new(),
            bind_address: "127.0.0.1:8082".to_string(),
        }
    }
}
