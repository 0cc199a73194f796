//! Configuration validation.
//!
//! Serde handles syntax; this checks meaning. Every problem is reported, not
//! just the first.

use std::net::SocketAddr;
use thiserror::Error;

use crate::config::schema::LimboConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("main_server and limbo_server are both '{0}'")]
    SameBackend(String),
    #[error("reconnect.interval_secs must be greater than zero")]
    ZeroInterval,
    #[error("reconnect.attempt_timeout_secs must be greater than zero")]
    ZeroAttemptTimeout,
    #[error("admin.api_key must be set when the admin API is enabled")]
    MissingAdminKey,
    #[error("{field} is not a socket address: '{value}'")]
    InvalidAddress { field: &'static str, value: String },
}

/// Check a parsed configuration.
pub fn validate_config(config: &LimboConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let names = config.backend_names();
    if let (Some(main), Some(limbo)) = (names.main(), names.limbo()) {
        if main == limbo {
            errors.push(ValidationError::SameBackend(main.to_string()));
        }
    }

    if config.reconnect.interval_secs == 0 {
        errors.push(ValidationError::ZeroInterval);
    }
    if config.reconnect.attempt_timeout_secs == 0 {
        errors.push(ValidationError::ZeroAttemptTimeout);
    }

    if config.admin.enabled {
        if config.admin.api_key.trim().is_empty() {
            errors.push(ValidationError::MissingAdminKey);
        }
        check_address(&mut errors, "admin.bind_address", &config.admin.bind_address);
    }

    if config.observability.metrics_enabled {
        check_address(
            &mut errors,
            "observability.metrics_address",
            &config.observability.metrics_address,
        );
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_address(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if value.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field,
            value: value.to_string(),
        });
    }
}
