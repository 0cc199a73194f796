//! Global auto-reconnect toggle and permission names.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::observability::metrics;

/// Players holding this are attempted even while auto-reconnect is off.
pub const BYPASS_PERMISSION: &str = "limboreturn.bypass";

/// Required to flip the auto-reconnect toggle.
pub const ADMIN_PERMISSION: &str = "limboreturn.admin";

/// The `autoReconnectEnabled` flag.
#[derive(Debug)]
pub struct ReconnectPolicy {
    auto_reconnect: AtomicBool,
}

impl ReconnectPolicy {
    pub fn new(enabled: bool) -> Self {
        metrics::record_auto_reconnect(enabled);
        Self {
            auto_reconnect: AtomicBool::new(enabled),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.auto_reconnect.load(Ordering::Acquire)
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.auto_reconnect.store(enabled, Ordering::Release);
        metrics::record_auto_reconnect(enabled);
    }

    /// Flip the flag and return the new state.
    pub fn toggle(&self) -> bool {
        let enabled = !self.auto_reconnect.fetch_xor(true, Ordering::AcqRel);
        metrics::record_auto_reconnect(enabled);
        tracing::info!(auto_reconnect = enabled, "Auto-reconnect toggled");
        enabled
    }
}

impl Default for ReconnectPolicy {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_and_reports() {
        let policy = ReconnectPolicy::default();
        assert!(policy.is_enabled());
        assert!(!policy.toggle());
        assert!(!policy.is_enabled());
        assert!(policy.toggle());
        assert!(policy.is_enabled());
    }

    #[test]
    fn test_set_enabled() {
        let policy = ReconnectPolicy::new(true);
        policy.set_enabled(false);
        assert!(!policy.is_enabled());
    }
}
