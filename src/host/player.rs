//! Player session identity.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque handle for one proxy session.
///
/// Two sessions of the same account are different players here: a reconnecting
/// client gets a fresh id and must not inherit the old session's pending state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(Uuid);

impl PlayerId {
    /// Mint an id for a new session.
    pub fn new_session() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap a session id issued by the host.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for PlayerId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sessions_are_distinct() {
        let a = PlayerId::new_session();
        let b = PlayerId::new_session();
        assert_ne!(a, b);
        assert_eq!(a, PlayerId::from_uuid(*a.as_uuid()));
    }
}
