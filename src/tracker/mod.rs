//! Reconnection tracking subsystem.
//!
//! # Data Flow
//! ```text
//! Player lands on limbo
//!     → pending.rs records player (+ previous backend as target)
//!
//! Player lands on target or main
//!     → pending.rs clears the entry
//!
//! Scheduler tick
//!     → snapshot.rs copies the pending set under the lock
//!     → effective targets resolved after the lock is released
//! ```
//!
//! # Design Decisions
//! - One mutex guards one map; membership and target can never disagree
//! - Every operation tolerates unknown players
//! - Snapshots are owned copies, never views into live state

pub mod pending;
pub mod snapshot;

pub use pending::ReconnectTracker;
pub use snapshot::{PendingPlayer, ReconnectCandidate};

/// The two backend names the tracker reasons about.
///
/// Empty names from the configuration file are normalised to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackendNames {
    main: Option<String>,
    limbo: Option<String>,
}

impl BackendNames {
    pub fn new(main: impl Into<String>, limbo: impl Into<String>) -> Self {
        Self {
            main: non_empty(main.into()),
            limbo: non_empty(limbo.into()),
        }
    }

    /// Configured main backend, if any.
    pub fn main(&self) -> Option<&str> {
        self.main.as_deref()
    }

    /// Configured limbo backend, if any.
    pub fn limbo(&self) -> Option<&str> {
        self.limbo.as_deref()
    }

    pub fn is_main(&self, name: &str) -> bool {
        self.main() == Some(name)
    }

    pub fn is_limbo(&self, name: &str) -> bool {
        self.limbo() == Some(name)
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_names_are_unset() {
        let names = BackendNames::new("", "  ");
        assert_eq!(names.main(), None);
        assert_eq!(names.limbo(), None);
        assert!(!names.is_main(""));
        assert!(!names.is_limbo(""));
    }

    #[test]
    fn test_names_match() {
        let names = BackendNames::new("survival", "limbo");
        assert!(names.is_main("survival"));
        assert!(names.is_limbo("limbo"));
        assert!(!names.is_main("limbo"));
    }
}
